//! HTML 리포트 및 삭제 스크립트 출력
//!
//! 리포트는 그룹마다 표 하나를 만들고, 파일마다 토글 버튼을 둡니다.
//! 버튼 동작과 스크립트 렌더링은 `assets/report-script.js`에 있습니다.

use crate::models::deletion_plan::{DeletionPlan, MARK_LABEL};
use crate::models::similarity_group::{GroupMember, SimilarityGroup};
use crate::utils::error::{ComparerError, Result};
use crate::utils::formatter::{file_timestamp, format_date_full, format_dimensions};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const REPORT_TITLE: &str = "image-comparer report";
const REPORT_HEADING: &str = "image-comparer Similarity Report";
const REPORT_SCRIPT: &str = include_str!("../../assets/report-script.js");
const REPORT_STYLE: &str = include_str!("../../assets/report-style.css");
/// 썸네일 한 변 (px)
const THUMBNAIL_SIZE: u32 = 200;

/// HTML 특수문자 이스케이프
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 로컬 경로 → file:// URL
pub fn file_url(path: &Path) -> String {
    let mut src = path.to_string_lossy().replace('\\', "/");
    if !src.starts_with('/') {
        src.insert(0, '/');
    }
    format!("file://{}", src)
}

/// 리포트 파일 이름
pub fn report_file_name(now: DateTime<Local>) -> String {
    format!("image-comparer-report_{}.html", file_timestamp(now))
}

/// 스크립트 파일 이름
pub fn script_file_name(now: DateTime<Local>) -> String {
    format!("image-comparer-script_{}.bat", file_timestamp(now))
}

/// 그룹 목록으로 HTML 문서 생성
pub fn render_html(groups: &[SimilarityGroup]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", REPORT_TITLE);
    let _ = writeln!(html, "<script type=\"text/javascript\">\n{}</script>", REPORT_SCRIPT);
    let _ = writeln!(html, "<style>\n{}</style>", REPORT_STYLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", REPORT_HEADING);

    for group in groups {
        html.push_str("<table>\n<tr><th>Thumbnail</th><th>Path/Last Modified/Hash</th><th>Delete</th></tr>\n");
        for member in group.members() {
            render_member_row(&mut html, &member);
        }
        html.push_str("</table>\n");
    }

    html.push_str("<pre id=\"emittedScript\"></pre>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_member_row(html: &mut String, member: &GroupMember<'_>) {
    let image = member.image;
    let image_style = if image.is_portrait() {
        format!("height:{}px; width:auto", THUMBNAIL_SIZE)
    } else {
        format!("height:auto; width:{}px", THUMBNAIL_SIZE)
    };
    let path = image.path_string();
    let escaped_path = escape_html(&path);

    html.push_str("<tr>\n");
    let _ = writeln!(
        html,
        "<td class=\"thumbnail\"><img src=\"{}\" style=\"{}\"></td>",
        escape_html(&file_url(&image.path)),
        image_style
    );
    let _ = writeln!(
        html,
        "<td><p>{}</p><p>{}, {}</p><p>Score Difference: {}</p></td>",
        escaped_path,
        format_dimensions(image.width, image.height),
        format_date_full(image.modified),
        member.score
    );
    let _ = writeln!(
        html,
        "<td class=\"toggle\"><button class=\"toggle\" data-path=\"{}\">{}</button></td>",
        escaped_path, MARK_LABEL
    );
    html.push_str("</tr>\n");
}

/// 리포트/스크립트 파일 작성기
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// HTML 리포트 작성, 작성된 파일 경로 반환
    pub fn write_report(&self, groups: &[SimilarityGroup], now: DateTime<Local>) -> Result<PathBuf> {
        let path = self.output_dir.join(report_file_name(now));
        self.write_file(&path, &render_html(groups))?;
        log::info!("report written: {} ({} groups)", path.display(), groups.len());
        Ok(path)
    }

    /// 삭제 스크립트 작성, 작성된 파일 경로 반환
    pub fn write_script(&self, plan: &DeletionPlan, now: DateTime<Local>) -> Result<PathBuf> {
        if plan.is_empty() {
            return Err(ComparerError::Report(
                "no files are marked for deletion".to_string(),
            ));
        }
        let path = self.output_dir.join(script_file_name(now));
        self.write_file(&path, &plan.render())?;
        log::info!("script written: {} ({} files)", path.display(), plan.len());
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(ComparerError::NotADirectory {
                path: self.output_dir.clone(),
            });
        }
        fs::write(path, content)?;
        Ok(())
    }
}
