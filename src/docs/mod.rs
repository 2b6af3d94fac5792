use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use pulldown_cmark::{Options, Parser};
use rust_embed::RustEmbed;

use crate::emit::EmitError;
use crate::registry::TokenSet;

#[derive(RustEmbed)]
#[folder = "stories/"]
struct StoryAssets;

/// One documentation story: a markdown description of how a component is
/// meant to be rendered and which custom properties it consumes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub component: String,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct StoryCatalog {
    inner: Arc<Vec<Story>>,
}

impl Default for StoryCatalog {
    fn default() -> Self {
        static DEFAULT_CATALOG: OnceLock<StoryCatalog> = OnceLock::new();
        DEFAULT_CATALOG.get_or_init(Self::build_default).clone()
    }
}

impl StoryCatalog {
    pub fn embedded() -> Self {
        Self::default()
    }

    fn build_default() -> Self {
        let mut names = StoryAssets::iter().collect::<Vec<_>>();
        names.sort();

        let mut stories = Vec::new();
        for name in names {
            if !name.ends_with(".md") {
                continue;
            }
            let Some(asset) = StoryAssets::get(&name) else {
                continue;
            };
            let body = String::from_utf8_lossy(&asset.data).into_owned();
            let id = name.trim_end_matches(".md").to_string();
            let component = id.split('.').next().unwrap_or(&id).to_string();
            let title = body
                .lines()
                .find_map(|line| line.strip_prefix("# "))
                .unwrap_or(&id)
                .trim()
                .to_string();
            stories.push(Story {
                id,
                title,
                component,
                body,
            });
        }
        Self {
            inner: Arc::new(stories),
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.inner
    }

    pub fn story(&self, id: &str) -> Option<&Story> {
        self.inner.iter().find(|story| story.id == id)
    }

    pub fn for_component(&self, component: &str) -> Vec<&Story> {
        self.inner
            .iter()
            .filter(|story| story.component == component)
            .collect()
    }
}

pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    pulldown_cmark::html::push_html(&mut out, parser);
    out
}

/// One HTML page with every story in catalog order.
pub fn render_story_page(catalog: &StoryCatalog) -> String {
    let mut out = String::from(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Component stories</title></head>\n<body>\n",
    );
    for story in catalog.stories() {
        let _ = write!(out, "<article data-story=\"{}\">\n", story.id);
        out.push_str(&render_html(&story.body));
        out.push_str("</article>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// Markdown reference table for one theme: token path, custom property, value.
pub fn token_reference(theme_id: &str, set: &TokenSet, prefix: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Design tokens: {theme_id}");
    out.push('\n');
    out.push_str("| Token | Custom property | Value |\n");
    out.push_str("| --- | --- | --- |\n");
    for (path, value) in set.iter() {
        let _ = writeln!(out, "| `{path}` | `{}` | `{value}` |", path.css_name(prefix));
    }
    out
}

pub fn write_reference(
    theme_id: &str,
    set: &TokenSet,
    prefix: &str,
    out_dir: &Path,
) -> Result<PathBuf, EmitError> {
    write_doc(
        out_dir,
        &format!("{theme_id}-tokens.md"),
        &token_reference(theme_id, set, prefix),
    )
}

pub fn write_story_page(catalog: &StoryCatalog, out_dir: &Path) -> Result<PathBuf, EmitError> {
    write_doc(out_dir, "stories.html", &render_story_page(catalog))
}

// Same all-or-nothing discipline as stylesheet emission.
fn write_doc(out_dir: &Path, filename: &str, content: &str) -> Result<PathBuf, EmitError> {
    let destination = out_dir.join(filename);
    let staging = out_dir.join(format!("{filename}.tmp"));
    let write_failed = |path: &Path, error: std::io::Error| EmitError::WriteFailed {
        path: path.to_path_buf(),
        error: error.to_string(),
    };

    fs::create_dir_all(out_dir).map_err(|error| write_failed(out_dir, error))?;
    fs::write(&staging, content).map_err(|error| write_failed(&staging, error))?;
    if let Err(error) = fs::rename(&staging, &destination) {
        let _ = fs::remove_file(&staging);
        return Err(write_failed(&destination, error));
    }
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TokenPath;

    #[test]
    fn embedded_catalog_contains_the_component_stories() {
        let catalog = StoryCatalog::embedded();
        assert!(!catalog.stories().is_empty());
        let button = catalog.story("button").unwrap();
        assert_eq!(button.component, "button");
        assert_eq!(button.title, "Button");
    }

    #[test]
    fn stories_group_by_component_stem() {
        let catalog = StoryCatalog::embedded();
        let stories = catalog.for_component("button");
        assert!(stories.iter().any(|story| story.id == "button"));
    }

    #[test]
    fn render_html_produces_headings_and_code() {
        let html = render_html("# Button\n\nUse `--calm-color-text-primary`.\n");
        assert!(html.contains("<h1>Button</h1>"));
        assert!(html.contains("<code>--calm-color-text-primary</code>"));
    }

    #[test]
    fn story_page_wraps_each_story_in_an_article() {
        let catalog = StoryCatalog::embedded();
        let page = render_story_page(&catalog);
        assert!(page.contains("<article data-story=\"button\">"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn token_reference_lists_rows_in_path_order() {
        let set = TokenSet::new()
            .token(TokenPath::parse("spacing.4").unwrap(), "1rem")
            .token(TokenPath::parse("brand.500").unwrap(), "#0ea5e9");
        let reference = token_reference("light", &set, "calm");
        let brand = reference.find("`brand.500`").unwrap();
        let spacing = reference.find("`spacing.4`").unwrap();
        assert!(brand < spacing);
        assert!(reference.contains("| `brand.500` | `--calm-brand-500` | `#0ea5e9` |"));
    }

    #[test]
    fn write_reference_creates_the_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let set = TokenSet::new().token(TokenPath::parse("spacing.4").unwrap(), "1rem");
        let path = write_reference("light", &set, "calm", dir.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Design tokens: light"));
    }
}
