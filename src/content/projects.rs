use crate::content::lookup;
use crate::parsers::text::{self, clean_text, create_slug, parse_project_title};
use crate::records::{ImageRef, PageRecord};
use crate::utils::prefix_chars;
use serde::Serialize;

pub const PROJECT_CATEGORY: &str = "Photography";

/// Characters of slug/title compared when looking for a project's own page
const MATCH_PREFIX_CHARS: usize = 10;

/// A portfolio project reconstructed from the work index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntity {
    /// `project-<n>`, n being the 1-based position on the work index
    pub id: String,
    pub title: String,
    pub year: String,
    pub slug: String,
    pub description: String,
    pub images: Vec<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<ImageRef>,
    pub category: String,
}

/// Work-index fragments that carry a year, in page order
pub fn project_fragments(index_text: &str) -> Vec<&str> {
    text::split_after_years(index_text)
        .into_iter()
        .filter(|fragment| text::contains_year(fragment))
        .collect()
}

/// Rebuild the project list from the work index, newest first.
///
/// Returns an empty list when there is no work page.
pub fn parse_projects(pages: &[PageRecord]) -> Vec<ProjectEntity> {
    let Some(work_page) = lookup::find_page(pages, lookup::is_work_page) else {
        ::log::debug!("No work page in snapshot");
        return Vec::new();
    };
    let Some(index_text) = work_page.primary_text() else {
        return Vec::new();
    };

    let mut projects = project_fragments(index_text)
        .into_iter()
        .enumerate()
        .filter_map(|(index, fragment)| build_project(pages, work_page, index, fragment))
        .collect::<Vec<_>>();

    // Stable: equal years keep index order
    projects.sort_by(|a, b| year_value(b).cmp(&year_value(a)));
    projects
}

fn build_project(
    pages: &[PageRecord],
    work_page: &PageRecord,
    index: usize,
    fragment: &str,
) -> Option<ProjectEntity> {
    let parsed = parse_project_title(fragment);
    if !parsed.is_complete() {
        ::log::trace!("Dropping project fragment {:?}", fragment);
        return None;
    }

    let slug = create_slug(&parsed.title);
    let thumbnail_image = work_page.images.get(index).cloned();
    let project_page = find_project_page(pages, &parsed.title, &slug);

    let images = match project_page {
        Some(page) => page.images.clone(),
        None => thumbnail_image.iter().cloned().collect(),
    };
    let description = project_page
        .and_then(PageRecord::primary_text)
        .map(clean_text)
        .unwrap_or_default();

    Some(ProjectEntity {
        id: format!("project-{}", index + 1),
        title: parsed.title,
        year: parsed.year,
        slug,
        description,
        images,
        thumbnail_image,
        category: PROJECT_CATEGORY.to_string(),
    })
}

/// First page whose URL holds the slug prefix or whose title holds the
/// title prefix, both compared lowercase
pub fn find_project_page<'a>(
    pages: &'a [PageRecord],
    title: &str,
    slug: &str,
) -> Option<&'a PageRecord> {
    let slug_prefix = prefix_chars(slug, MATCH_PREFIX_CHARS);
    let lowered_title = title.to_lowercase();
    let title_prefix = prefix_chars(&lowered_title, MATCH_PREFIX_CHARS);

    pages.iter().find(|page| {
        page.url.to_lowercase().contains(slug_prefix)
            || page.title.to_lowercase().contains(title_prefix)
    })
}

fn year_value(project: &ProjectEntity) -> u32 {
    project.year.parse().unwrap_or(0)
}
