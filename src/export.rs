//! Delimited-text export of a generated rota.
//!
//! Renders the ordered entries as a table with columns `Date`, `Weekday`,
//! `Assignee`, `Meeting Type`. Locale-specific weekday naming and on-disk
//! serialization live here, outside the generation core.
//!
//! Dates are formatted `DD/MM/YYYY`. Fields containing the delimiter,
//! quotes, or line breaks are double-quoted.

use chrono::Weekday;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::models::{Rota, ScheduleEntry};

/// Date column format.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// UTF-8 byte-order mark, for spreadsheet tools that want one.
const BOM: &str = "\u{feff}";

/// Localized weekday names for the `Weekday` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayNames {
    /// English names ("Monday".."Sunday").
    #[default]
    English,
    /// Portuguese names ("Segunda".."Domingo").
    Portuguese,
}

impl DayNames {
    /// Display name for a weekday in this locale.
    pub fn name(&self, weekday: Weekday) -> &'static str {
        match self {
            DayNames::English => match weekday {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
            DayNames::Portuguese => match weekday {
                Weekday::Mon => "Segunda",
                Weekday::Tue => "Terça",
                Weekday::Wed => "Quarta",
                Weekday::Thu => "Quinta",
                Weekday::Fri => "Sexta",
                Weekday::Sat => "Sábado",
                Weekday::Sun => "Domingo",
            },
        }
    }
}

/// Renders a rota as delimited text.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_rota::export::TableExporter;
/// use u_rota::models::{Rota, ScheduleEntry};
///
/// let mut rota = Rota::new();
/// rota.push(ScheduleEntry::assignment(
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     "Ana",
///     "Lab meeting",
/// ));
///
/// let table = TableExporter::new().render(&rota);
/// assert_eq!(
///     table,
///     "Date;Weekday;Assignee;Meeting Type\n02/06/2025;Monday;Ana;Lab meeting\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TableExporter {
    delimiter: char,
    day_names: DayNames,
    bom: bool,
}

impl Default for TableExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExporter {
    /// Creates an exporter with `;` delimiter and English day names.
    pub fn new() -> Self {
        Self {
            delimiter: ';',
            day_names: DayNames::English,
            bom: false,
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the weekday-name locale.
    pub fn with_day_names(mut self, day_names: DayNames) -> Self {
        self.day_names = day_names;
        self
    }

    /// Prepends a UTF-8 BOM when saving, for spreadsheet imports.
    pub fn with_bom(mut self) -> Self {
        self.bom = true;
        self
    }

    /// Renders the full table, header included, one line per entry.
    pub fn render(&self, rota: &Rota) -> String {
        let mut out = String::new();
        out.push_str(&self.header());
        out.push('\n');
        for entry in rota.iter() {
            out.push_str(&self.row(entry));
            out.push('\n');
        }
        out
    }

    /// Writes the rendered table to `writer`.
    pub fn write_to<W: Write>(&self, rota: &Rota, mut writer: W) -> io::Result<()> {
        writer.write_all(self.render(rota).as_bytes())
    }

    /// Saves the rendered table to `path`, with a BOM if configured.
    pub fn save(&self, rota: &Rota, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = File::create(path)?;
        if self.bom {
            file.write_all(BOM.as_bytes())?;
        }
        self.write_to(rota, &mut file)
    }

    fn header(&self) -> String {
        let sep = self.delimiter.to_string();
        ["Date", "Weekday", "Assignee", "Meeting Type"].join(&sep)
    }

    fn row(&self, entry: &ScheduleEntry) -> String {
        let sep = self.delimiter.to_string();
        [
            entry.date.format(DATE_FORMAT).to_string(),
            self.day_names.name(entry.weekday).to_string(),
            self.field(entry.assignee()),
            self.field(&entry.meeting_label()),
        ]
        .join(&sep)
    }

    /// Quotes a field when it would break the table shape.
    fn field(&self, raw: &str) -> String {
        if raw.contains(self.delimiter) || raw.contains('"') || raw.contains('\n') {
            format!("\"{}\"", raw.replace('"', "\"\""))
        } else {
            raw.to_string()
        }
    }
}
