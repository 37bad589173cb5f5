use yahoo_fin_rs::Cell;
use yahoo_fin_rs::scrape::{option_texts, parse_tables};

#[test]
fn tables_read_thead_and_cells() {
    let html = r#"<table>
  <thead><tr><th>Name</th><th>Value</th></tr></thead>
  <tbody>
    <tr><td> Market   Cap </td><td>1.5B</td></tr>
    <tr><td>Beta</td><td></td></tr>
  </tbody>
</table>
<table><tr><td>Open</td><td>10</td></tr></table>"#;
    let tables = parse_tables(html);
    assert_eq!(tables.len(), 2);

    let t = &tables[0];
    assert_eq!(t.columns, vec!["Name", "Value"]);
    assert_eq!(t.get(0, 0), Some(&Cell::Text("Market Cap".into())));
    assert_eq!(t.get(1, 1), Some(&Cell::Missing));

    assert!(tables[1].columns.is_empty());
    assert_eq!(tables[1].pairs(), vec![("Open".to_string(), "10".to_string())]);
}

#[test]
fn leading_th_row_is_header() {
    let html = "<table><tr><th>Symbol</th><th>Security</th></tr><tr><td>MMM</td><td>3M</td></tr></table>";
    let t = &parse_tables(html)[0];
    assert_eq!(t.columns, vec!["Symbol", "Security"]);
    assert_eq!(t.text_column("Symbol").unwrap(), vec!["MMM"]);
}

#[test]
fn option_elements_are_collected() {
    let html = r#"<select><option value="1">January 15, 2021</option><option> </option><option>February 19, 2021</option></select>"#;
    assert_eq!(option_texts(html), vec!["January 15, 2021", "February 19, 2021"]);
}
