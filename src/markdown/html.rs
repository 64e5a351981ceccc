//! mdast to HTML.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use markdown::mdast::{self, AlignKind, Node};
use regex::Regex;

use super::{escape_attr, escape_html, MarkdownOptions};

fn tag_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| Regex::new(r"<[^<>]*>").expect("tag regex must compile"))
}

fn allowed_tag_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| {
        Regex::new(
            r#"(?i)^(?:<img class="wl-emoji" src="[^"<>]*" alt="[^"<>]*"\s*/?>|</?(?:b|i|u|s|em|strong|del|ins|sub|sup|kbd|mark|code|small|span|p|br|details|summary)\s*/?>)$"#,
        )
        .expect("allowed tag regex must compile")
    })
}

/// Keep allow-listed tags, escape every other tag and all text between tags.
pub fn sanitize_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;
    for tag in tag_regex().find_iter(raw) {
        out.push_str(&escape_html(&raw[last..tag.start()]));
        if allowed_tag_regex().is_match(tag.as_str()) {
            out.push_str(tag.as_str());
        } else {
            out.push_str(&escape_html(tag.as_str()));
        }
        last = tag.end();
    }
    out.push_str(&escape_html(&raw[last..]));
    out
}

/// `#` for script-capable URLs. `data:` is only allowed for images.
fn safe_url(url: &str, image: bool) -> String {
    let lowered = url.trim().to_ascii_lowercase();
    let blocked = lowered.starts_with("javascript:")
        || lowered.starts_with("vbscript:")
        || (lowered.starts_with("data:") && !(image && lowered.starts_with("data:image/")));
    if blocked {
        "#".to_owned()
    } else {
        escape_attr(url)
    }
}

pub fn render_html(root: &Node, options: MarkdownOptions<'_>) -> String {
    let mut renderer = HtmlRenderer {
        options,
        definitions: BTreeMap::new(),
        out: String::new(),
    };
    renderer.collect_definitions(root);
    renderer.block(root, false);
    renderer.out
}

struct HtmlRenderer<'a> {
    options: MarkdownOptions<'a>,
    definitions: BTreeMap<String, (String, Option<String>)>,
    out: String,
}

impl HtmlRenderer<'_> {
    fn collect_definitions(&mut self, node: &Node) {
        if let Node::Definition(definition) = node {
            self.definitions.insert(
                definition.identifier.to_lowercase(),
                (definition.url.clone(), definition.title.clone()),
            );
        }
        if let Some(children) = node.children() {
            for child in children {
                self.collect_definitions(child);
            }
        }
    }

    fn blocks(&mut self, nodes: &[Node], tight: bool) {
        for node in nodes {
            self.block(node, tight);
        }
    }

    fn block(&mut self, node: &Node, tight: bool) {
        match node {
            Node::Root(root) => self.blocks(&root.children, false),
            Node::Paragraph(paragraph) => {
                if tight {
                    self.inlines(&paragraph.children);
                } else {
                    self.out.push_str("<p>");
                    self.inlines(&paragraph.children);
                    self.out.push_str("</p>\n");
                }
            }
            Node::Heading(heading) => {
                let depth = heading.depth.clamp(1, 6);
                self.out.push_str(&format!("<h{depth}>"));
                self.inlines(&heading.children);
                self.out.push_str(&format!("</h{depth}>\n"));
            }
            Node::Blockquote(quote) => {
                self.out.push_str("<blockquote>\n");
                self.blocks(&quote.children, false);
                self.out.push_str("</blockquote>\n");
            }
            Node::List(list) => self.list(list),
            Node::Code(code) => self.code(code),
            Node::Math(math) => match self.options.tex_renderer {
                Some(render) => {
                    self.out.push_str(&render(true, &math.value));
                    self.out.push('\n');
                }
                None => {
                    self.out.push_str(&format!("<p>$$\n{}\n$$</p>\n", escape_html(&math.value)));
                }
            },
            Node::ThematicBreak(_) => self.out.push_str("<hr>\n"),
            Node::Html(html) => {
                self.out.push_str(&sanitize_html(&html.value));
                self.out.push('\n');
            }
            Node::Table(table) => self.table(table),
            Node::Definition(_) => {}
            other => {
                if tight {
                    self.inline(other);
                } else {
                    self.out.push_str("<p>");
                    self.inline(other);
                    self.out.push_str("</p>\n");
                }
            }
        }
    }

    fn list(&mut self, list: &mdast::List) {
        let tight = !list.spread
            && list.children.iter().all(|item| match item {
                Node::ListItem(item) => !item.spread,
                _ => true,
            });

        if list.ordered {
            match list.start {
                Some(start) if start != 1 => self.out.push_str(&format!("<ol start=\"{start}\">\n")),
                _ => self.out.push_str("<ol>\n"),
            }
        } else {
            self.out.push_str("<ul>\n");
        }

        for item in &list.children {
            let Node::ListItem(item) = item else {
                continue;
            };
            self.out.push_str("<li>");
            if let Some(checked) = item.checked {
                self.out.push_str(if checked {
                    "<input type=\"checkbox\" disabled checked> "
                } else {
                    "<input type=\"checkbox\" disabled> "
                });
            }
            self.blocks(&item.children, tight);
            self.out.push_str("</li>\n");
        }

        self.out.push_str(if list.ordered { "</ol>\n" } else { "</ul>\n" });
    }

    fn code(&mut self, code: &mdast::Code) {
        let lang = code.lang.as_deref().unwrap_or_default();
        if lang.is_empty() {
            self.out.push_str("<pre><code>");
        } else {
            self.out
                .push_str(&format!("<pre><code class=\"language-{}\">", escape_attr(lang)));
        }
        match self.options.highlighter {
            Some(highlight) => self.out.push_str(&highlight(&code.value, lang)),
            None => self.out.push_str(&escape_html(&code.value)),
        }
        self.out.push_str("</code></pre>\n");
    }

    fn table(&mut self, table: &mdast::Table) {
        self.out.push_str("<table>\n");
        for (index, row) in table.children.iter().enumerate() {
            let Node::TableRow(row) = row else {
                continue;
            };
            let cell_tag = if index == 0 { "th" } else { "td" };
            if index == 0 {
                self.out.push_str("<thead>\n");
            } else if index == 1 {
                self.out.push_str("<tbody>\n");
            }
            self.out.push_str("<tr>\n");
            for (column, cell) in row.children.iter().enumerate() {
                let align = match table.align.get(column) {
                    Some(AlignKind::Left) => " align=\"left\"",
                    Some(AlignKind::Right) => " align=\"right\"",
                    Some(AlignKind::Center) => " align=\"center\"",
                    _ => "",
                };
                self.out.push_str(&format!("<{cell_tag}{align}>"));
                if let Node::TableCell(cell) = cell {
                    self.inlines(&cell.children);
                }
                self.out.push_str(&format!("</{cell_tag}>\n"));
            }
            self.out.push_str("</tr>\n");
            if index == 0 {
                self.out.push_str("</thead>\n");
            }
        }
        if table.children.len() > 1 {
            self.out.push_str("</tbody>\n");
        }
        self.out.push_str("</table>\n");
    }

    fn inlines(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.inline(node);
        }
    }

    fn inline(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.out.push_str(&escape_html(&text.value).replace('\n', "<br>")),
            Node::Strong(strong) => self.wrap("strong", &strong.children),
            Node::Emphasis(emphasis) => self.wrap("em", &emphasis.children),
            Node::Delete(delete) => self.wrap("del", &delete.children),
            Node::InlineCode(code) => {
                self.out.push_str(&format!("<code>{}</code>", escape_html(&code.value)));
            }
            Node::Break(_) => self.out.push_str("<br>"),
            Node::Html(html) => self.out.push_str(&sanitize_html(&html.value)),
            Node::Link(link) => {
                self.open_link(&link.url, link.title.as_deref());
                self.inlines(&link.children);
                self.out.push_str("</a>");
            }
            Node::LinkReference(reference) => {
                match self.definitions.get(&reference.identifier.to_lowercase()).cloned() {
                    Some((url, title)) => {
                        self.open_link(&url, title.as_deref());
                        self.inlines(&reference.children);
                        self.out.push_str("</a>");
                    }
                    None => self.inlines(&reference.children),
                }
            }
            Node::Image(image) => self.image(&image.url, &image.alt, image.title.as_deref()),
            Node::ImageReference(reference) => {
                match self.definitions.get(&reference.identifier.to_lowercase()).cloned() {
                    Some((url, title)) => self.image(&url, &reference.alt, title.as_deref()),
                    None => self.out.push_str(&escape_html(&reference.alt)),
                }
            }
            Node::InlineMath(math) => match self.options.tex_renderer {
                Some(render) => self.out.push_str(&render(false, &math.value)),
                None => self.out.push_str(&format!("${}$", escape_html(&math.value))),
            },
            other => {
                if let Some(children) = other.children() {
                    self.inlines(children);
                } else {
                    self.out.push_str(&escape_html(&other.to_string()));
                }
            }
        }
    }

    fn wrap(&mut self, tag: &str, children: &[Node]) {
        self.out.push_str(&format!("<{tag}>"));
        self.inlines(children);
        self.out.push_str(&format!("</{tag}>"));
    }

    fn open_link(&mut self, url: &str, title: Option<&str>) {
        self.out.push_str(&format!("<a href=\"{}\"", safe_url(url, false)));
        if let Some(title) = title {
            self.out.push_str(&format!(" title=\"{}\"", escape_attr(title)));
        }
        self.out.push('>');
    }

    fn image(&mut self, url: &str, alt: &str, title: Option<&str>) {
        self.out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\"",
            safe_url(url, true),
            escape_attr(alt)
        ));
        if let Some(title) = title {
            self.out.push_str(&format!(" title=\"{}\"", escape_attr(title)));
        }
        self.out.push('>');
    }
}
