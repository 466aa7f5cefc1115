//! The full print-ready HTML report document.
//!
//! Deterministic string assembly: same data renders identical bytes. The
//! document embeds the section narratives, category tables, and inline SVG
//! charts; PDF conversion is left to an external tool.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use palika_core::locale::{format_count, format_percentage};
use palika_db::repositories::{CivilOrganizationRepo, ElectedRepresentativeRepo};
use palika_report::{sections, SectionId, SectionReport};

use crate::error::AppResult;
use crate::handlers::fetch_section_rows;
use crate::state::AppState;

/// GET /report -- the complete report as one HTML document.
pub async fn get_report_document(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let municipality = state.config.municipality_name.clone();

    let mut section_reports = Vec::with_capacity(SectionId::ALL.len());
    for id in SectionId::ALL {
        let rows = fetch_section_rows(&state.pool, *id).await?;
        section_reports.push(sections::process(*id, &municipality, &rows));
    }

    let representatives = ElectedRepresentativeRepo::list(&state.pool).await?;
    let organizations = CivilOrganizationRepo::list(&state.pool).await?;

    let html = render_document(&municipality, &section_reports, &representatives, &organizations);
    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html))
}

// Minimal writer with deterministic push order.
struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(64 * 1024),
        }
    }

    fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn esc(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn render_document(
    municipality: &str,
    section_reports: &[SectionReport],
    representatives: &[palika_db::models::governance::ElectedRepresentative],
    organizations: &[palika_db::models::governance::CivilOrganization],
) -> String {
    let mut w = Html::new();

    w.push("<!DOCTYPE html><html lang=\"ne\"><head><meta charset=\"utf-8\">");
    w.push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    w.push("<title>");
    w.push(&esc(municipality));
    w.push(" — डिजिटल प्रोफाइल</title><style>");
    w.push(DOCUMENT_CSS);
    w.push("</style></head><body>");

    w.push("<header><h1>");
    w.push(&esc(municipality));
    w.push("</h1><p class=\"subtitle\">डिजिटल प्रोफाइल प्रतिवेदन</p></header>");

    for report in section_reports {
        render_section(&mut w, report);
    }

    render_governance(&mut w, representatives, organizations);

    w.push("</body></html>");
    w.finish()
}

fn render_section(w: &mut Html, report: &SectionReport) {
    w.push("<section class=\"report-section\"><h2>");
    w.push(report.title_np);
    w.push("</h2><p class=\"narrative\">");
    w.push(&esc(&report.narrative_np));
    w.push("</p>");

    // Category-by-ward table; one column per ward with data, then the
    // municipality total and percentage. Zero rows are kept so every
    // category is visible. Ward bucket lists share the category order of
    // the municipality buckets, so rows line up by index.
    w.push("<table><thead><tr><th>विवरण</th>");
    for ward in &report.wards {
        w.push("<th>वडा ");
        w.push(&format_count(i64::from(ward.ward_number)));
        w.push("</th>");
    }
    w.push("<th>जम्मा</th><th>प्रतिशत</th></tr></thead><tbody>");
    for (idx, bucket) in report.buckets.iter().enumerate() {
        w.push("<tr><td>");
        w.push(bucket.label_np);
        w.push("</td>");
        for ward in &report.wards {
            let count = ward.buckets.get(idx).map_or(0, |b| b.count);
            w.push("<td>");
            w.push(&format_count(count));
            w.push("</td>");
        }
        w.push("<td>");
        w.push(&format_count(bucket.count));
        w.push("</td><td>");
        w.push(&format_percentage(bucket.percentage));
        w.push("</td></tr>");
    }
    w.push("<tr class=\"total\"><td>जम्मा</td>");
    for ward in &report.wards {
        w.push("<td>");
        w.push(&format_count(ward.total));
        w.push("</td>");
    }
    w.push("<td>");
    w.push(&format_count(report.total));
    w.push("</td><td>");
    w.push(&format_percentage(if report.total > 0 { 100.0 } else { 0.0 }));
    w.push("</td></tr></tbody></table>");

    // Charts are already SVG; embed inline. Sections without data omit them.
    if let Some(pie) = &report.pie_svg {
        w.push("<figure class=\"chart\">");
        w.push(pie);
        w.push("</figure>");
    }
    if let Some(bar) = &report.bar_svg {
        w.push("<figure class=\"chart\">");
        w.push(bar);
        w.push("</figure>");
    }

    w.push("</section>");
}

fn render_governance(
    w: &mut Html,
    representatives: &[palika_db::models::governance::ElectedRepresentative],
    organizations: &[palika_db::models::governance::CivilOrganization],
) {
    w.push("<section class=\"report-section\"><h2>जनप्रतिनिधि विवरण</h2>");
    w.push("<table><thead><tr><th>नाम</th><th>पद</th><th>वडा</th><th>दल</th></tr></thead><tbody>");
    for rep in representatives {
        w.push("<tr><td>");
        w.push(&esc(&rep.full_name));
        w.push("</td><td>");
        w.push(&esc(&rep.position));
        w.push("</td><td>");
        match rep.ward_number {
            Some(ward) => w.push(&format_count(ward as i64)),
            None => w.push("—"),
        }
        w.push("</td><td>");
        w.push(&esc(rep.party.as_deref().unwrap_or("—")));
        w.push("</td></tr>");
    }
    w.push("</tbody></table>");

    w.push("<h2>सामुदायिक संघसंस्था</h2>");
    w.push("<table><thead><tr><th>संस्था</th><th>प्रकार</th><th>वडा</th></tr></thead><tbody>");
    for org in organizations {
        w.push("<tr><td>");
        w.push(&esc(&org.name));
        w.push("</td><td>");
        w.push(&esc(&org.kind));
        w.push("</td><td>");
        match org.ward_number {
            Some(ward) => w.push(&format_count(ward as i64)),
            None => w.push("—"),
        }
        w.push("</td></tr>");
    }
    w.push("</tbody></table></section>");
}

const DOCUMENT_CSS: &str = "body{font-family:'Noto Sans Devanagari',sans-serif;margin:2rem auto;max-width:60rem;color:#1f2937}\
header{text-align:center;margin-bottom:2rem}\
h1{margin-bottom:0.25rem}\
.subtitle{color:#6b7280}\
.report-section{page-break-inside:avoid;margin-bottom:2.5rem}\
.narrative{line-height:1.8;text-align:justify}\
table{border-collapse:collapse;width:100%;margin:1rem 0}\
th,td{border:1px solid #d1d5db;padding:0.4rem 0.6rem;text-align:left}\
th{background:#f3f4f6}\
tr.total td{font-weight:bold;background:#f9fafb}\
.chart{margin:1rem 0;text-align:center}";

#[cfg(test)]
mod tests {
    use super::*;
    use palika_report::sections::religion;

    fn sample_row(ward: i16, code: &str, value: i64) -> palika_db::models::ward_category::WardCategoryRow {
        palika_db::models::ward_category::WardCategoryRow {
            id: 0,
            ward_number: ward,
            category: code.to_string(),
            value,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn document_embeds_section_and_charts() {
        let rows = vec![sample_row(1, "HINDU", 800), sample_row(1, "BUDDHIST", 200)];
        let report = religion::process("नमूना गाउँपालिका", &rows);
        let html = render_document("नमूना गाउँपालिका", &[report], &[], &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("धर्म अनुसार जनसंख्या"));
        assert!(html.contains("<svg"));
        assert!(html.contains("जनप्रतिनिधि विवरण"));
    }

    #[test]
    fn section_table_includes_per_ward_columns() {
        let rows = vec![
            sample_row(1, "HINDU", 700),
            sample_row(1, "BUDDHIST", 100),
            sample_row(2, "HINDU", 150),
        ];
        let report = religion::process("नमूना गाउँपालिका", &rows);
        assert_eq!(report.wards.len(), 2);

        let mut w = Html::new();
        render_section(&mut w, &report);
        let html = w.finish();
        assert!(html.contains("<th>वडा १</th>"));
        assert!(html.contains("<th>वडा २</th>"));
        // Ward 2 contributes its own cells: the ward total 150 appears in
        // the total row alongside the municipality total 950.
        assert!(html.contains("<td>१५०</td>"));
        assert!(html.contains("<td>९५०</td>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let rows = vec![sample_row(2, "HINDU", 10)];
        let report = religion::process("नमूना", &rows);
        let a = render_document("नमूना", std::slice::from_ref(&report), &[], &[]);
        let b = render_document("नमूना", std::slice::from_ref(&report), &[], &[]);
        assert_eq!(a, b);
    }
}
