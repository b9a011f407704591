#[inline]
fn unquote(cell: &str) -> &str {
    let cell = cell.trim();
    for q in ['"', '\''] {
        if cell.len() >= 2 && cell.starts_with(q) && cell.ends_with(q) {
            return &cell[1..cell.len() - 1];
        }
    }
    cell
}

/// Splits one CSV line of readings.
///
/// A quote opens a quoted cell only at the start of that cell; commas inside
/// it do not split. Surrounding quotes are removed and empty cells are kept so
/// blank readings stay in position.
pub fn split_reading_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut in_quotes: Option<char> = None;

    for (i, ch) in line.char_indices() {
        match in_quotes {
            Some(q) if ch == q => in_quotes = None,
            Some(_) => {}
            None if (ch == '"' || ch == '\'') && line[start..i].trim().is_empty() => {
                in_quotes = Some(ch)
            }
            None if ch == ',' => {
                cells.push(unquote(&line[start..i]).to_string());
                start = i + 1;
            }
            None => {}
        }
    }
    cells.push(unquote(&line[start..]).to_string());
    cells
}
