use serde::Serialize;
use std::fmt;

const IMAGES: &[&str] = &[
    "Convert images to modern formats (WebP, AVIF)",
    "Implement responsive images with srcset",
    "Use appropriate image dimensions",
    "Compress images without losing quality",
    "Lazy load offscreen images",
    "Consider using image CDN services",
];

const PERFORMANCE: &[&str] = &[
    "Minimize HTTP requests",
    "Enable Gzip/Brotli compression",
    "Implement browser caching",
    "Use async/defer for JavaScript files",
    "Reduce third-party script usage",
    "Optimize web fonts loading",
];

const ACCESSIBILITY: &[&str] = &[
    "Add proper alt text to images",
    "Ensure sufficient color contrast",
    "Use semantic HTML elements",
    "Make all interactive elements keyboard accessible",
    "Add ARIA labels where needed",
    "Ensure form labels are properly associated",
];

const SEO: &[&str] = &[
    "Add meta descriptions to all pages",
    "Use proper heading hierarchy (H1-H6)",
    "Implement structured data markup",
    "Ensure mobile-friendly design",
    "Create descriptive, keyword-rich URLs",
    "Add canonical tags to prevent duplicate content",
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CatalogCategory {
    Images,
    Performance,
    Accessibility,
    Seo,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 4] = [
        Self::Images,
        Self::Performance,
        Self::Accessibility,
        Self::Seo,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Images => "Image Optimization",
            Self::Performance => "Performance Optimization",
            Self::Accessibility => "Accessibility Improvements",
            Self::Seo => "SEO Enhancements",
        }
    }
}

impl fmt::Display for CatalogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// applies to every site regardless of its measurements
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RecommendationCatalog {
    pub images: &'static [&'static str],
    pub performance: &'static [&'static str],
    pub accessibility: &'static [&'static str],
    pub seo: &'static [&'static str],
}

impl RecommendationCatalog {
    pub fn items(&self, category: CatalogCategory) -> &'static [&'static str] {
        match category {
            CatalogCategory::Images => self.images,
            CatalogCategory::Performance => self.performance,
            CatalogCategory::Accessibility => self.accessibility,
            CatalogCategory::Seo => self.seo,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (CatalogCategory, &'static [&'static str])> {
        let catalog = *self;
        CatalogCategory::ALL
            .into_iter()
            .map(move |category| (category, catalog.items(category)))
    }
}

pub fn build_general_recommendations() -> RecommendationCatalog {
    RecommendationCatalog {
        images: IMAGES,
        performance: PERFORMANCE,
        accessibility: ACCESSIBILITY,
        seo: SEO,
    }
}
