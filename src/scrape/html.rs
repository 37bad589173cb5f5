//! Read rendered HTML `<table>` and `<option>` elements.

use scraper::{ElementRef, Html, Selector};

use crate::core::{Cell, Table};

/// Parse every `<table>` in document order.
///
/// Header labels come from the `<thead>` row, or from a leading row made only of
/// `<th>` cells; tables with neither get empty `columns`. Cells hold the element's
/// text with whitespace collapsed; blank cells are [`Cell::Missing`].
pub fn parse_tables(html: &str) -> Vec<Table> {
    let doc = Html::parse_document(html);
    let (Ok(table_sel), Ok(tr_sel), Ok(cell_sel)) = (
        Selector::parse("table"),
        Selector::parse("tr"),
        Selector::parse("th, td"),
    ) else {
        return Vec::new();
    };

    doc.select(&table_sel)
        .map(|table| read_table(table, &tr_sel, &cell_sel))
        .collect()
}

fn read_table(table: ElementRef<'_>, tr_sel: &Selector, cell_sel: &Selector) -> Table {
    let mut out = Table::default();

    for tr in table.select(tr_sel) {
        let cells: Vec<ElementRef<'_>> = tr.select(cell_sel).collect();
        if cells.is_empty() {
            continue;
        }

        let in_thead = tr
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|p| p.value().name() == "thead");
        let all_th = cells.iter().all(|c| c.value().name() == "th");

        if in_thead || (all_th && out.columns.is_empty() && out.rows.is_empty()) {
            if out.columns.is_empty() {
                out.columns = cells.iter().map(|c| element_text(*c)).collect();
            }
            continue;
        }

        out.rows.push(
            cells
                .iter()
                .map(|c| Cell::from_text(element_text(*c)))
                .collect(),
        );
    }

    out
}

/// Text of every `<option>` element, trimmed, blanks dropped.
pub fn option_texts(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let Ok(sel) = Selector::parse("option") else {
        return Vec::new();
    };
    doc.select(&sel)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect()
}

fn element_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
