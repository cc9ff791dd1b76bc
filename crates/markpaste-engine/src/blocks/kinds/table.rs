use crate::blocks::types::CellAlign;

/// Table row syntax knowledge: cell splitting, separator rows, alignment.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// Splits a line on unescaped `|` into trimmed cells, honouring `\|`
    /// as a literal pipe. Returns `None` when the line contains no
    /// unescaped pipe at all.
    pub fn split_cells(line: &str) -> Option<Vec<String>> {
        if !Self::has_unescaped_pipe(line) {
            return None;
        }

        let mut cells = vec![String::new()];
        let mut chars = line.trim().chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&Self::PIPE) => {
                    chars.next();
                    cells.last_mut().unwrap().push(Self::PIPE);
                }
                c if c == Self::PIPE => cells.push(String::new()),
                c => cells.last_mut().unwrap().push(c),
            }
        }

        // Edge pipes produce empty first/last cells; drop those only.
        for cell in &mut cells {
            *cell = cell.trim().to_string();
        }
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        Some(cells)
    }

    /// Returns true when every cell matches `:?-+:?`, i.e. the row is a
    /// header/body separator.
    pub fn is_separator(cells: &[String]) -> bool {
        !cells.is_empty()
            && cells.iter().all(|c| {
                let inner = c.strip_prefix(':').unwrap_or(c);
                let inner = inner.strip_suffix(':').unwrap_or(inner);
                !inner.is_empty() && inner.chars().all(|ch| ch == '-')
            })
    }

    /// Parses colon placement in a separator cell into an alignment.
    pub fn alignment(cell: &str) -> CellAlign {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => CellAlign::Center,
            (true, false) => CellAlign::Left,
            (false, true) => CellAlign::Right,
            (false, false) => CellAlign::None,
        }
    }

    fn has_unescaped_pipe(line: &str) -> bool {
        let mut prev_backslash = false;
        for c in line.chars() {
            if c == Self::PIPE && !prev_backslash {
                return true;
            }
            prev_backslash = c == '\\';
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_edge_piped_row() {
        assert_eq!(
            TableRow::split_cells("| A | B |").unwrap(),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn splits_row_without_edge_pipes() {
        assert_eq!(
            TableRow::split_cells("A | B").unwrap(),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn keeps_inner_empty_cells() {
        assert_eq!(
            TableRow::split_cells("|A||B|").unwrap(),
            vec!["A".to_string(), String::new(), "B".to_string()]
        );
    }

    #[test]
    fn escaped_pipe_stays_in_cell() {
        assert_eq!(
            TableRow::split_cells(r"| a\|b | c |").unwrap(),
            vec!["a|b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn line_without_pipe_is_not_a_row() {
        assert_eq!(TableRow::split_cells("plain text"), None);
        assert_eq!(TableRow::split_cells(r"only \| escaped"), None);
    }

    #[test]
    fn separator_row_detection() {
        let cells = TableRow::split_cells("|---|:---:|--:|").unwrap();
        assert!(TableRow::is_separator(&cells));
        let not = TableRow::split_cells("| A | B |").unwrap();
        assert!(!TableRow::is_separator(&not));
    }

    #[test]
    fn alignment_from_colons() {
        assert_eq!(TableRow::alignment("---"), CellAlign::None);
        assert_eq!(TableRow::alignment(":--"), CellAlign::Left);
        assert_eq!(TableRow::alignment(":-:"), CellAlign::Center);
        assert_eq!(TableRow::alignment("--:"), CellAlign::Right);
    }
}
