use super::record::Record;
use super::tsv;
use super::LoadError;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// Required columns, by header name. Order in the resource is free.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Numero",
    "Titolo",
    "Sinossi",
    "Data di uscita",
    "Soggetto",
    "Sceneggiatura",
    "Disegni",
    "Copertina",
    "Immagine",
    "Scheda",
];

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Non-fatal findings from a catalog load. The catalog is still usable,
/// but the caller should know.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub enum Problem {
    DuplicateNumber { number: u32 },
}

/// The immutable loaded record sequence.
///
/// Records stay in resource order; every derived view in the query layer
/// is a pure function over this sequence.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<Record>,
    problems: Vec<Problem>,
}

/// Header-name resolved cell indices for one loaded resource.
struct Columns {
    number: usize,
    title: usize,
    synopsis: usize,
    release_date: usize,
    subject: usize,
    script: usize,
    art: usize,
    cover: usize,
    cover_image_url: usize,
    detail_page_url: usize,
}

impl Columns {
    fn resolve(header: &[String]) -> Result<Columns, LoadError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    name: name.to_owned(),
                })
        };
        Ok(Columns {
            number: find("Numero")?,
            title: find("Titolo")?,
            synopsis: find("Sinossi")?,
            release_date: find("Data di uscita")?,
            subject: find("Soggetto")?,
            script: find("Sceneggiatura")?,
            art: find("Disegni")?,
            cover: find("Copertina")?,
            cover_image_url: find("Immagine")?,
            detail_page_url: find("Scheda")?,
        })
    }

    fn parse_row(&self, row: &[String], row_number: usize) -> Result<Record, LoadError> {
        let cell = |index: usize, column: &str| {
            row.get(index)
                .map(String::as_str)
                .ok_or_else(|| LoadError::MalformedField {
                    row: row_number,
                    column: column.to_owned(),
                    value: String::new(),
                })
        };

        let number_text = cell(self.number, "Numero")?;
        let number: u32 =
            number_text
                .trim()
                .parse()
                .map_err(|_| LoadError::MalformedField {
                    row: row_number,
                    column: "Numero".to_owned(),
                    value: number_text.to_owned(),
                })?;
        if number == 0 {
            return Err(LoadError::MalformedField {
                row: row_number,
                column: "Numero".to_owned(),
                value: number_text.to_owned(),
            });
        }

        let date_text = cell(self.release_date, "Data di uscita")?;
        let release_date = NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT).map_err(
            |_| LoadError::MalformedField {
                row: row_number,
                column: "Data di uscita".to_owned(),
                value: date_text.to_owned(),
            },
        )?;

        Ok(Record {
            number,
            title: cell(self.title, "Titolo")?.to_owned(),
            synopsis: cell(self.synopsis, "Sinossi")?.to_owned(),
            release_date,
            cover_image_url: cell(self.cover_image_url, "Immagine")?.to_owned(),
            detail_page_url: cell(self.detail_page_url, "Scheda")?.to_owned(),
            subject: cell(self.subject, "Soggetto")?.to_owned(),
            script: cell(self.script, "Sceneggiatura")?.to_owned(),
            art: cell(self.art, "Disegni")?.to_owned(),
            cover: cell(self.cover, "Copertina")?.to_owned(),
        })
    }
}

impl Catalog {
    /// Parse a whole tab-separated resource, header row first.
    ///
    /// Fails as a whole on a missing column or a malformed field; no
    /// partial sequence is ever returned. Duplicate issue numbers are
    /// kept and recorded as [`Problem::DuplicateNumber`].
    pub fn from_tsv(text: &str) -> Result<Catalog, LoadError> {
        let mut rows = tsv::parse_rows(text);
        if rows.is_empty() {
            return Err(LoadError::MissingColumn {
                name: REQUIRED_COLUMNS[0].to_owned(),
            });
        }
        let header = rows.remove(0);
        let columns = Columns::resolve(&header)?;

        let mut records = Vec::with_capacity(rows.len());
        let mut seen = HashSet::new();
        let mut problems = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            // Row numbers are 1-based and include the header row.
            let record = columns.parse_row(row, i + 2)?;
            if !seen.insert(record.number) {
                problems.push(Problem::DuplicateNumber {
                    number: record.number,
                });
            }
            records.push(record);
        }

        Ok(Catalog { records, problems })
    }

    /// Records in resource order, never mutated after load.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn get(&self, number: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Numero\tTitolo\tSinossi\tData di uscita\tSoggetto\tSceneggiatura\tDisegni\tCopertina\tImmagine\tScheda";

    fn row(number: &str, title: &str, date: &str) -> String {
        format!("{number}\t{title}\tUna sinossi.\t{date}\tBoselli\tBoselli, Colombo\tMajo\tFrisenda\thttp://img\thttp://scheda")
    }

    #[test]
    fn parses_records_from_tsv() {
        let text = format!("{HEADER}\n{}\n{}\n", row("3", "Terzo", "01/06/2000"), row("1", "Primo", "14/04/2000"));
        let catalog = Catalog::from_tsv(&text).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.problems().is_empty());

        let first = &catalog.records()[0];
        assert_eq!(first.number, 3);
        assert_eq!(first.title, "Terzo");
        assert_eq!(first.script, "Boselli, Colombo");
        assert_eq!(first.year(), 2000);
        assert_eq!(catalog.get(1).unwrap().title, "Primo");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn column_order_is_insignificant() {
        let text = "Titolo\tNumero\tScheda\tImmagine\tCopertina\tDisegni\tSceneggiatura\tSoggetto\tData di uscita\tSinossi\n\
            Primo\t1\thttp://scheda\thttp://img\tFrisenda\tMajo\tBoselli\tBoselli\t14/04/2000\tUna sinossi.\n";
        let catalog = Catalog::from_tsv(text).unwrap();
        let record = &catalog.records()[0];
        assert_eq!(record.number, 1);
        assert_eq!(record.title, "Primo");
        assert_eq!(record.cover, "Frisenda");
        assert_eq!(record.detail_page_url, "http://scheda");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = format!("{HEADER}\tExtra\n{}\tboh\n", row("1", "Primo", "14/04/2000"));
        let catalog = Catalog::from_tsv(&text).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_column_fails_the_load() {
        let text = "Numero\tTitolo\n1\tPrimo\n";
        match Catalog::from_tsv(text) {
            Err(LoadError::MissingColumn { name }) => assert_eq!(name, "Sinossi"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn empty_resource_fails_the_load() {
        match Catalog::from_tsv("") {
            Err(LoadError::MissingColumn { name }) => assert_eq!(name, "Numero"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_number_fails_the_load() {
        let text = format!("{HEADER}\n{}\n", row("dodici", "Primo", "14/04/2000"));
        match Catalog::from_tsv(&text) {
            Err(LoadError::MalformedField { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Numero");
                assert_eq!(value, "dodici");
            }
            other => panic!("expected MalformedField, got {other:?}"),
        }
    }

    #[test]
    fn zero_number_fails_the_load() {
        let text = format!("{HEADER}\n{}\n", row("0", "Primo", "14/04/2000"));
        assert!(matches!(
            Catalog::from_tsv(&text),
            Err(LoadError::MalformedField { .. })
        ));
    }

    #[test]
    fn unparseable_date_fails_the_load() {
        let text = format!("{HEADER}\n{}\n", row("1", "Primo", "aprile 2000"));
        match Catalog::from_tsv(&text) {
            Err(LoadError::MalformedField { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Data di uscita");
            }
            other => panic!("expected MalformedField, got {other:?}"),
        }
    }

    #[test]
    fn short_row_fails_the_load() {
        let text = format!("{HEADER}\n1\tPrimo\n");
        assert!(matches!(
            Catalog::from_tsv(&text),
            Err(LoadError::MalformedField { .. })
        ));
    }

    #[test]
    fn duplicate_numbers_are_kept_and_reported() {
        let text = format!(
            "{HEADER}\n{}\n{}\n",
            row("7", "Primo", "14/04/2000"),
            row("7", "Secondo", "01/06/2000")
        );
        let catalog = Catalog::from_tsv(&text).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.problems(),
            &[Problem::DuplicateNumber { number: 7 }]
        );
    }
}
