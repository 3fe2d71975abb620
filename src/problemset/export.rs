extern crate handlebars;
extern crate rust_xlsxwriter;

pub mod link;
pub mod sheet;

use rust_xlsxwriter::{Format, Url, Workbook, XlsxError};
use std::{error::Error as StdError, fmt, path::Path};

#[derive(Debug)]
pub enum Error {
    Template(handlebars::TemplateError),
    Render(handlebars::RenderError),
    Xlsx(XlsxError),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => write!(f, "Invalid template: {}", e),
            Self::Render(e) => write!(f, "Error rendering template: {}", e),
            Self::Xlsx(e) => write!(f, "Error writing workbook: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Template(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Xlsx(e) => Some(e),
        }
    }
}
impl From<XlsxError> for Error {
    fn from(e: XlsxError) -> Self {
        Self::Xlsx(e)
    }
}
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Link { url: String, text: String },
}

/// One worksheet: a bold header row followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub header: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

pub fn to_workbook(sheets: &[Sheet]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    for s in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(s.name.as_str())?;
        for (col, title) in s.header.iter().enumerate() {
            ws.write_string_with_format(0, col as u16, *title, &bold)?;
        }
        for (row, cells) in s.rows.iter().enumerate() {
            let row = row as u32 + 1;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(t) => ws.write_string(row, col, t.as_str())?,
                    Cell::Number(n) => ws.write_number(row, col, *n)?,
                    Cell::Link { url, text } => {
                        ws.write_url_with_text(row, col, Url::new(url.as_str()), text.as_str())?
                    }
                };
            }
        }
        ws.autofit();
    }
    Ok(workbook)
}
pub fn save<P: AsRef<Path>>(sheets: &[Sheet], path: P) -> Result<()> {
    to_workbook(sheets)?.save(path)?;
    Ok(())
}
pub fn to_buffer(sheets: &[Sheet]) -> Result<Vec<u8>> {
    Ok(to_workbook(sheets)?.save_to_buffer()?)
}
