pub const TITLE: &str = "Navigation Hub";
pub const TAGLINE: &str = "Welcome to my corner of the web, every link that matters in one place.";
pub const DESCRIPTION: &str = "Personal navigation page linking to my resume, blog, projects, code and contact details.";
pub const LANGUAGE: &str = "en";
pub const OWNER: &str = "Chenhui Yang";

/// Document title for a page: the page's own title followed by the site
/// title, or the site title alone.
pub fn document_title(page: String) -> String {
    if page.is_empty() {
        String::from(TITLE)
    } else {
        format!("{page} - {TITLE}")
    }
}
