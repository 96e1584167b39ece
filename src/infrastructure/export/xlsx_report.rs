//! Styled workbook report
//!
//! Two sheets: a cover sheet describing the deliverable and a `Books` data
//! sheet with a filled header row, currency-formatted prices and columns
//! sized to their longest rendered value.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Color, ColNum, Format, FormatAlign, FormatPattern, RowNum, Workbook, Worksheet, XlsxError};
use std::path::Path;

use super::ExportError;
use crate::domain::NormalizedItem;
use crate::infrastructure::config::defaults;

pub const DATA_COLUMNS: usize = 6;
pub const DATA_HEADERS: [&str; DATA_COLUMNS] = ["Title", "Price", "Rating", "Availability", "Category", "URL"];

const COVER_SHEET_NAME: &str = "Cover";
const DATA_SHEET_NAME: &str = "Books";

const HEADER_FILL: u32 = 0x1F4E78;
const PRICE_FORMAT: &str = "£#,##0.00";
const COVER_TITLE_SIZE: u8 = 18;
const COVER_COLUMN_WIDTH: u8 = 60;
/// Excel rejects wider columns
const MAX_COLUMN_WIDTH: u8 = 255;

const PRICE_COLUMN: ColNum = 1;
const RATING_COLUMN: ColNum = 2;

/// Write the cover and data sheets to `path`
pub fn write_styled_workbook(
    path: &Path,
    items: &[NormalizedItem],
    generated_at: DateTime<Utc>,
) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(build_cover_sheet(generated_at)?);
    workbook.push_worksheet(build_data_sheet(items)?);
    workbook.save(path)?;
    Ok(())
}

fn build_cover_sheet(generated_at: DateTime<Utc>) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(COVER_SHEET_NAME)?;

    let title_format = Format::new()
        .set_bold()
        .set_font_size(COVER_TITLE_SIZE)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);
    let body_format = Format::new().set_text_wrap();

    sheet.write_string_with_format(0, 0, "Books Scraper \u{2014} Project Deliverable", &title_format)?;

    let generated = format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC"));
    let body: [(RowNum, &str); 7] = [
        (1, generated.as_str()),
        (3, "Description:"),
        (4, "This dataset was generated by a Rust web scraper (reqwest + scraper)."),
        (
            5,
            "It includes book Title, Price (GBP), Rating (1-5), Availability, Category and direct URL to the product page.",
        ),
        (7, "Contact:"),
        (8, "Name: [Your Name Here]"),
        (9, "Email: [your.email@example.com]"),
    ];
    for (row, text) in body {
        sheet.write_string_with_format(row, 0, text, &body_format)?;
    }

    sheet.set_column_width(0, COVER_COLUMN_WIDTH)?;
    Ok(sheet)
}

fn build_data_sheet(items: &[NormalizedItem]) -> Result<Worksheet, ExportError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(DATA_SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let price_format = Format::new().set_num_format(PRICE_FORMAT);
    let rating_format = Format::new().set_align(FormatAlign::Center);

    for (col, header) in (0..).zip(DATA_HEADERS) {
        sheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (index, item) in items.iter().enumerate() {
        let row = RowNum::try_from(index + 1).map_err(|_| ExportError::TooManyRows { rows: items.len() })?;
        let record = &item.record;

        sheet.write_string(row, 0, &record.title)?;
        if let Some(price) = item.price {
            sheet.write_number_with_format(row, PRICE_COLUMN, price, &price_format)?;
        }
        sheet.write_number_with_format(row, RATING_COLUMN, item.rating, &rating_format)?;
        sheet.write_string(row, 3, &item.availability)?;
        sheet.write_string(row, 4, &record.detail.category)?;
        sheet.write_string(row, 5, &record.url)?;
    }

    for (col, width) in (0..).zip(column_widths(items)) {
        let width = u8::try_from(width).unwrap_or(MAX_COLUMN_WIDTH).min(MAX_COLUMN_WIDTH);
        sheet.set_column_width(col, width)?;
    }

    sheet.set_freeze_panes(1, 0)?;
    Ok(sheet)
}

/// Column widths for the data sheet: longest rendered value (header
/// included) plus padding, counted in characters
pub fn column_widths(items: &[NormalizedItem]) -> [usize; DATA_COLUMNS] {
    let mut widths = DATA_HEADERS.map(|header| header.chars().count());

    for item in items {
        let cells = [
            Some(item.record.title.clone()),
            item.price.map(|price| format!("{price:?}")),
            Some(item.rating.to_string()),
            Some(item.availability.clone()),
            Some(item.record.detail.category.clone()),
            Some(item.record.url.clone()),
        ];
        for (width, cell) in widths.iter_mut().zip(cells) {
            if let Some(cell) = cell {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    widths.map(|width| width + defaults::COLUMN_WIDTH_PADDING)
}
