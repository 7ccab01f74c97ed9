// src/markdown.rs
//! Markdown → structured visual tree. Parsing is a pure function of the
//! input text; the widget mapping lives in `ui::report`.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// One styled run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
            emphasis: false,
            strikethrough: false,
            code: false,
            link: None,
        }
    }

    fn same_style(&self, other: &Self) -> bool {
        self.strong == other.strong
            && self.emphasis == other.emphasis
            && self.strikethrough == other.strikethrough
            && self.code == other.code
            && self.link == other.link
    }
}

/// Block-level node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Span> },
    Paragraph(Vec<Span>),
    List { ordered: bool, start: u64, items: Vec<Vec<Block>> },
    CodeBlock { language: Option<String>, code: String },
    BlockQuote(Vec<Block>),
    Table { header: Vec<Vec<Span>>, rows: Vec<Vec<Vec<Span>>> },
    Rule,
}

struct ListCtx {
    ordered: bool,
    start: u64,
    items: Vec<Vec<Block>>,
}

#[derive(Default)]
struct TableCtx {
    header: Vec<Vec<Span>>,
    rows: Vec<Vec<Vec<Span>>>,
    cells: Vec<Vec<Span>>,
}

#[derive(Default)]
struct TreeBuilder {
    // containers[0] is the document root; items and quotes push a scope.
    containers: Vec<Vec<Block>>,
    lists: Vec<ListCtx>,
    table: Option<TableCtx>,
    inline: Vec<Span>,
    code_block: Option<(Option<String>, String)>,
    strong: u32,
    emphasis: u32,
    strikethrough: u32,
    links: Vec<String>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            containers: vec![Vec::new()],
            ..Default::default()
        }
    }

    fn push_block(&mut self, block: Block) {
        self.containers
            .last_mut()
            .expect("container stack never empty")
            .push(block);
    }

    fn push_span(&mut self, span: Span) {
        if let Some(last) = self.inline.last_mut() {
            if last.same_style(&span) {
                last.text.push_str(&span.text);
                return;
            }
        }
        self.inline.push(span);
    }

    fn styled_span(&self, text: String) -> Span {
        Span {
            text,
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            strikethrough: self.strikethrough > 0,
            code: false,
            link: self.links.last().cloned(),
        }
    }

    fn take_inline(&mut self) -> Vec<Span> {
        std::mem::take(&mut self.inline)
    }

    // Loose text inside list items arrives without a paragraph wrapper;
    // fold whatever is pending into one before closing the scope.
    fn flush_inline(&mut self) {
        if !self.inline.is_empty() {
            let spans = self.take_inline();
            self.push_block(Block::Paragraph(spans));
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph | Tag::Heading(..) => {}
            Tag::BlockQuote => {
                self.flush_inline();
                self.containers.push(Vec::new());
            }
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                self.code_block = Some((language, String::new()));
            }
            Tag::List(start) => {
                self.flush_inline();
                self.lists.push(ListCtx {
                    ordered: start.is_some(),
                    start: start.unwrap_or(1),
                    items: Vec::new(),
                });
            }
            Tag::Item => self.containers.push(Vec::new()),
            Tag::Table(_) => self.table = Some(TableCtx::default()),
            Tag::TableHead | Tag::TableRow | Tag::TableCell => {}
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strong => self.strong += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link(_, destination, _) => self.links.push(destination.to_string()),
            Tag::Image(..) | Tag::FootnoteDefinition(_) => {}
        }
    }

    fn end_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                let spans = self.take_inline();
                if !spans.is_empty() {
                    self.push_block(Block::Paragraph(spans));
                }
            }
            Tag::Heading(level, ..) => {
                let content = self.take_inline();
                self.push_block(Block::Heading {
                    level: heading_level(level),
                    content,
                });
            }
            Tag::BlockQuote => {
                self.flush_inline();
                let blocks = self.containers.pop().unwrap_or_default();
                self.push_block(Block::BlockQuote(blocks));
            }
            Tag::CodeBlock(_) => {
                if let Some((language, code)) = self.code_block.take() {
                    self.push_block(Block::CodeBlock {
                        language,
                        code: code.trim_end_matches('\n').to_string(),
                    });
                }
            }
            Tag::List(_) => {
                if let Some(list) = self.lists.pop() {
                    self.push_block(Block::List {
                        ordered: list.ordered,
                        start: list.start,
                        items: list.items,
                    });
                }
            }
            Tag::Item => {
                self.flush_inline();
                let blocks = self.containers.pop().unwrap_or_default();
                if let Some(list) = self.lists.last_mut() {
                    list.items.push(blocks);
                }
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.header = std::mem::take(&mut table.cells);
                }
            }
            Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = std::mem::take(&mut table.cells);
                    table.rows.push(row);
                }
            }
            Tag::TableCell => {
                let cell = self.take_inline();
                if let Some(table) = self.table.as_mut() {
                    table.cells.push(cell);
                }
            }
            Tag::Table(_) => {
                if let Some(table) = self.table.take() {
                    self.push_block(Block::Table {
                        header: table.header,
                        rows: table.rows,
                    });
                }
            }
            Tag::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            Tag::Strong => self.strong = self.strong.saturating_sub(1),
            Tag::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            Tag::Link(..) => {
                self.links.pop();
            }
            Tag::Image(..) | Tag::FootnoteDefinition(_) => {}
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                if let Some((_, code)) = self.code_block.as_mut() {
                    code.push_str(&text);
                } else {
                    let span = self.styled_span(text.to_string());
                    self.push_span(span);
                }
            }
            Event::Code(text) => {
                let mut span = self.styled_span(text.to_string());
                span.code = true;
                self.push_span(span);
            }
            Event::SoftBreak => {
                let span = self.styled_span(" ".to_string());
                self.push_span(span);
            }
            Event::HardBreak => {
                let span = self.styled_span("\n".to_string());
                self.push_span(span);
            }
            Event::Rule => self.push_block(Block::Rule),
            Event::TaskListMarker(checked) => {
                let marker = if checked { "☑ " } else { "☐ " };
                let span = self.styled_span(marker.to_string());
                self.push_span(span);
            }
            Event::Html(_) | Event::FootnoteReference(_) => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_inline();
        self.containers.swap_remove(0)
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Parse markdown into the block tree. GFM tables, strikethrough and task
/// lists are enabled to match what the analysis agents emit.
pub fn parse(source: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(source, options) {
        builder.event(event);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(blocks: &[Block], index: usize) -> &[Span] {
        match &blocks[index] {
            Block::Paragraph(spans) => spans,
            Block::Heading { content, .. } => content,
            other => panic!("expected inline-bearing block, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_tree() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n  ").is_empty());
    }

    #[test]
    fn heading_and_paragraph() {
        let blocks = parse("# Overview\n\nStrong quarter.");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Heading {
                level: 1,
                content: vec![Span::plain("Overview")],
            }
        );
        assert_eq!(blocks[1], Block::Paragraph(vec![Span::plain("Strong quarter.")]));
    }

    #[test]
    fn heading_levels_map_one_to_one() {
        let blocks = parse("## Two\n\n#### Four");
        assert!(matches!(blocks[0], Block::Heading { level: 2, .. }));
        assert!(matches!(blocks[1], Block::Heading { level: 4, .. }));
    }

    #[test]
    fn emphasis_strong_and_inline_code() {
        let blocks = parse("Buy **now** or `wait` for a *dip*.");
        let spans = spans(&blocks, 0);
        assert_eq!(spans[0], Span::plain("Buy "));
        assert!(spans[1].strong && spans[1].text == "now");
        assert!(spans[3].code && spans[3].text == "wait");
        assert!(spans[5].emphasis && spans[5].text == "dip");
    }

    #[test]
    fn adjacent_same_style_text_is_merged() {
        // pulldown splits plain text at entities; the tree should not.
        let blocks = parse("risk &amp; reward");
        assert_eq!(spans(&blocks, 0), &[Span::plain("risk & reward")]);
    }

    #[test]
    fn bullet_list_items_become_nested_blocks() {
        let blocks = parse("- alpha\n- beta\n");
        let Block::List { ordered, start, items } = &blocks[0] else {
            panic!("expected list");
        };
        assert!(!*ordered);
        assert_eq!(*start, 1);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], vec![Block::Paragraph(vec![Span::plain("alpha")])]);
        assert_eq!(items[1], vec![Block::Paragraph(vec![Span::plain("beta")])]);
    }

    #[test]
    fn ordered_list_keeps_start_number() {
        let blocks = parse("3. third\n4. fourth\n");
        let Block::List { ordered, start, items } = &blocks[0] else {
            panic!("expected list");
        };
        assert!(*ordered);
        assert_eq!(*start, 3);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn nested_list_lives_inside_parent_item() {
        let blocks = parse("- outer\n  - inner\n");
        let Block::List { items, .. } = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0][0], Block::Paragraph(vec![Span::plain("outer")]));
        assert!(matches!(items[0][1], Block::List { .. }));
    }

    #[test]
    fn fenced_code_block_keeps_language() {
        let blocks = parse("```python\nprint(1)\n```\n");
        assert_eq!(
            blocks[0],
            Block::CodeBlock {
                language: Some("python".to_string()),
                code: "print(1)".to_string(),
            }
        );
    }

    #[test]
    fn block_quote_wraps_inner_blocks() {
        let blocks = parse("> caution ahead\n");
        assert_eq!(
            blocks[0],
            Block::BlockQuote(vec![Block::Paragraph(vec![Span::plain("caution ahead")])])
        );
    }

    #[test]
    fn horizontal_rule() {
        let blocks = parse("above\n\n---\n\nbelow\n");
        assert_eq!(blocks[1], Block::Rule);
    }

    #[test]
    fn table_splits_header_and_rows() {
        let source = "| metric | value |\n|---|---|\n| P/E | 31.2 |\n| EPS | 6.1 |\n";
        let Block::Table { header, rows } = &parse(source)[0] else {
            panic!("expected table");
        };
        assert_eq!(header.len(), 2);
        assert_eq!(header[0], vec![Span::plain("metric")]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], vec![Span::plain("31.2")]);
        assert_eq!(rows[1][0], vec![Span::plain("EPS")]);
    }

    #[test]
    fn link_destination_is_carried_on_spans() {
        let blocks = parse("see [the filing](https://example.com/10k)");
        let spans = spans(&blocks, 0);
        assert_eq!(spans[1].text, "the filing");
        assert_eq!(spans[1].link.as_deref(), Some("https://example.com/10k"));
    }

    #[test]
    fn task_list_markers_render_as_text() {
        let blocks = parse("- [x] hedge\n- [ ] rebalance\n");
        let Block::List { items, .. } = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(
            items[0][0],
            Block::Paragraph(vec![Span::plain("☑ hedge")])
        );
        assert_eq!(
            items[1][0],
            Block::Paragraph(vec![Span::plain("☐ rebalance")])
        );
    }

    #[test]
    fn parse_is_a_pure_function_of_its_input() {
        let source = "# A\n\n- one\n- two\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert_eq!(parse(source), parse(source));
    }
}
