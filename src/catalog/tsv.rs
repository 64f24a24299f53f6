//! Minimal tab-separated values parsing.

/// Split tab-separated text into rows of cells.
///
/// CRLF tolerant, blank lines skipped. Cells are kept verbatim; there is
/// no quoting convention in TSV.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(str::to_owned).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_cells() {
        let rows = parse_rows("a\tb\tc\n1\t2\t3\n");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let rows = parse_rows("a\tb\r\n1\t2\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn skips_blank_lines() {
        let rows = parse_rows("a\tb\n\n1\t2\n   \n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn keeps_empty_cells() {
        let rows = parse_rows("a\t\tc");
        assert_eq!(rows, vec![vec!["a", "", "c"]]);
    }
}
