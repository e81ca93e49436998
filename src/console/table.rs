use crate::catalog::dto::BookDto;
use crate::utils::date::{fmt_table_date, fmt_table_datetime};

const COLUMNS: [(&str, usize); 6] = [
    ("ID", 4),
    ("Title", 32),
    ("Author", 22),
    ("Status", 18),
    ("Checkout Date", 17),
    ("Due Date", 17),
];

fn cell(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

// Date cells follow the original table: a single book shows its timestamps
// down to the minute; a series shows date-only when exactly one volume is
// out, "Various" when several are, and "-" otherwise.
pub(crate) fn date_cells(book: &BookDto) -> (String, String) {
    if book.is_series() {
        match book.volume_loans.as_slice() {
            [] => ("-".to_string(), "-".to_string()),
            [loan] => (fmt_table_date(loan.checkout_at), fmt_table_date(loan.due_at)),
            _ => ("Various".to_string(), "Various".to_string()),
        }
    } else {
        match &book.loan {
            Some(loan) => (fmt_table_datetime(loan.checkout_at), fmt_table_datetime(loan.due_at)),
            None => ("-".to_string(), "-".to_string()),
        }
    }
}

fn format_row(book: &BookDto) -> String {
    let (checkout, due) = date_cells(book);
    let cells = [
        cell(book.book_id.to_string().as_str(), COLUMNS[0].1),
        cell(book.title.as_str(), COLUMNS[1].1),
        cell(book.author.as_str(), COLUMNS[2].1),
        cell(book.status_display().as_str(), COLUMNS[3].1),
        cell(checkout.as_str(), COLUMNS[4].1),
        cell(due.as_str(), COLUMNS[5].1),
    ];
    cells.join(" ").trim_end().to_string()
}

pub(crate) fn render(books: &[BookDto]) -> String {
    let header: Vec<String> = COLUMNS.iter().map(|(name, width)| cell(name, *width)).collect();
    let rule: Vec<String> = COLUMNS.iter().map(|(_, width)| "-".repeat(*width)).collect();
    let mut lines = vec![header.join(" ").trim_end().to_string(), rule.join(" ")];
    for book in books {
        lines.push(format_row(book));
    }
    lines.join("\n")
}
