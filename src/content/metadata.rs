use crate::config::SiteConfig;
use crate::content::projects::ProjectEntity;
use crate::records::PageRecord;
use serde::Serialize;

/// Head metadata for a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Local path of the preview image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Metadata from a page's own `<meta>` tags, site defaults where empty
pub fn page_metadata(page: &PageRecord, config: &SiteConfig) -> PageMetadata {
    PageMetadata {
        title: page.title.clone(),
        description: non_empty_or(&page.meta.description, &config.default_description),
        keywords: non_empty_or(&page.meta.keywords, &config.default_keywords),
        image: None,
    }
}

/// Metadata for a project page, or a not-found title when there is no project
pub fn project_metadata(project: Option<&ProjectEntity>, config: &SiteConfig) -> PageMetadata {
    let Some(project) = project else {
        return PageMetadata {
            title: format!("Project Not Found — {}", config.site_name),
            description: config.default_description.clone(),
            keywords: config.default_keywords.clone(),
            image: None,
        };
    };

    let fallback = format!("Photography project {} from {}", project.title, project.year);
    PageMetadata {
        title: format!("{} {} — {}", project.title, project.year, config.site_name),
        description: non_empty_or(&project.description, &fallback),
        keywords: format!(
            "{}, {}, photography, art, {}",
            project.title, project.year, config.site_name
        ),
        image: project
            .thumbnail_image
            .as_ref()
            .map(|image| image.local_path.clone()),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ImageRef;

    fn project(description: &str) -> ProjectEntity {
        ProjectEntity {
            id: "project-1".to_string(),
            title: "Elsewhere".to_string(),
            year: "2019".to_string(),
            slug: "elsewhere".to_string(),
            description: description.to_string(),
            images: Vec::new(),
            thumbnail_image: Some(ImageRef {
                src: "http://example.com/t.jpg".to_string(),
                alt: String::new(),
                local_path: "/images/t.jpg".to_string(),
            }),
            category: "Photography".to_string(),
        }
    }

    #[test]
    fn test_page_defaults() {
        let config = SiteConfig::default();
        let mut page = PageRecord::new("http://example.com/about");
        page.title = "ABOUT".to_string();
        page.meta.keywords = "sets, miniatures".to_string();

        let metadata = page_metadata(&page, &config);
        assert_eq!(metadata.title, "ABOUT");
        assert_eq!(metadata.description, config.default_description);
        assert_eq!(metadata.keywords, "sets, miniatures");
    }

    #[test]
    fn test_project_metadata() {
        let config = SiteConfig::default();

        let metadata = project_metadata(Some(&project("")), &config);
        assert_eq!(metadata.title, "Elsewhere 2019 — Choki Lindberg");
        assert_eq!(metadata.description, "Photography project Elsewhere from 2019");
        assert_eq!(metadata.image.as_deref(), Some("/images/t.jpg"));

        let described = project_metadata(Some(&project("Built by hand.")), &config);
        assert_eq!(described.description, "Built by hand.");
    }

    #[test]
    fn test_missing_project() {
        let metadata = project_metadata(None, &SiteConfig::default());
        assert_eq!(metadata.title, "Project Not Found — Choki Lindberg");
        assert_eq!(metadata.image, None);
    }
}
