use crate::composer::escape_html;
use crate::document::StandardListing;

const WRAPPER_STYLE: &str =
    "font-family: Arial, Helvetica, sans-serif; max-width: 800px; margin: 0 auto; color: #222222; line-height: 1.5;";
const TITLE_STYLE: &str = "font-size: 24px; margin: 0 0 16px;";
const HEADING_STYLE: &str =
    "font-size: 18px; margin: 24px 0 8px; padding-bottom: 4px; border-bottom: 2px solid #e0e0e0;";
const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%;";
const KEY_CELL_STYLE: &str =
    "padding: 6px 10px; border: 1px solid #e0e0e0; background-color: #f7f7f7; font-weight: bold; width: 35%;";
const VALUE_CELL_STYLE: &str = "padding: 6px 10px; border: 1px solid #e0e0e0;";
const PARAGRAPH_STYLE: &str = "margin: 0 0 12px;";

/// Renders a standard listing as an inline-styled fragment. Every field is escaped, the same as
/// premium listings.
pub fn render_standard_listing(listing: &StandardListing) -> String {
    let mut html = format!("<div style=\"{}\">\n", WRAPPER_STYLE);
    html.push_str(&format!(
        "<h1 style=\"{}\">{}</h1>\n",
        TITLE_STYLE,
        escape_html(listing.title.trim())
    ));

    if !listing.item_specifics.is_empty() {
        html.push_str(&heading("Item Specifics"));
        html.push_str(&format!("<table style=\"{}\">\n", TABLE_STYLE));
        for (key, value) in &listing.item_specifics {
            html.push_str(&format!(
                "<tr><td style=\"{}\">{}</td><td style=\"{}\">{}</td></tr>\n",
                KEY_CELL_STYLE,
                escape_html(&humanize_key(key)),
                VALUE_CELL_STYLE,
                escape_html(value.trim())
            ));
        }
        html.push_str("</table>\n");
    }

    let description = paragraphs_of(&listing.description);
    if !description.is_empty() {
        html.push_str(&heading("Description"));
        html.push_str(&description);
    }

    let grade = listing.condition_report_grade.trim();
    let report = paragraphs_of(&listing.condition_report);
    if !grade.is_empty() || !report.is_empty() {
        html.push_str(&heading("Condition"));
        if !grade.is_empty() {
            html.push_str(&format!(
                "<p style=\"{}\"><strong>Grade: {}</strong></p>\n",
                PARAGRAPH_STYLE,
                escape_html(grade)
            ));
        }
        html.push_str(&report);
    }

    html.push_str("</div>\n");
    html
}

fn heading(text: &str) -> String {
    format!("<h2 style=\"{}\">{}</h2>\n", HEADING_STYLE, text)
}

/// Splits text on blank lines; single line breaks inside a paragraph become `<br>`.
fn paragraphs_of(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| {
            let lines = paragraph
                .lines()
                .map(|line| escape_html(line.trim()))
                .collect::<Vec<_>>()
                .join("<br>");
            format!("<p style=\"{}\">{}</p>\n", PARAGRAPH_STYLE, lines)
        })
        .collect()
}

/// `release_year` -> `Release Year`.
fn humanize_key(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
