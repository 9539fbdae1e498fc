use std::io::Write;

use anyhow::{Result, Context};
use clap::Parser as ClapParser;
use html_native::{elements::*, att, bool_att, opt_att, component, when, Attributes,
                  Fragment, Print, Renderable, Tag, ATTRIBUTE_DB};
use html_native_util::warn;
use itertools::Itertools;


#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print whether the attribute may be used on the element.
    Check {
        tag: String,
        attribute: String,
    },
    /// List the supported element names.
    Tags,
    /// Print the attribute database as JSON (the format accepted via
    /// the HTML_NATIVE_DB_JSON env var).
    DumpDb,
    /// Render an example page.
    Demo {
        /// Prefix the doctype declaration
        #[clap(long)]
        document: bool,
    },
}

#[derive(clap::Parser, Debug)]
/// Query the HTML attribute database and render example markup.
struct Args {
    #[clap(subcommand)]
    command: Command,
}


struct Article {
    title: &'static str,
    paragraphs: &'static [&'static str],
    draft: bool,
}

impl Renderable for Article {
    fn render(&self) -> Fragment {
        article_with([att("class", "post")], || {
            h2_with([], || self.title)
                + span_with([att("class", "draft")], || "(draft)").if_true(self.draft)
                + Fragment::from_pieces(
                    self.paragraphs.iter().map(|para| p_with([], || *para)))
        })
    }
}

fn demo_page() -> Fragment {
    let articles = [
        Article {
            title: "First",
            paragraphs: &["One.", "Two."],
            draft: false,
        },
        Article {
            title: "Second",
            paragraphs: &["Three."],
            draft: true,
        },
    ];
    let current = "first";
    let footer_note = component(|| small_with([], || "generated by htmlnative"));

    html_with([att("lang", "en")], || {
        head_with([], || {
            meta([att("charset", "utf-8")])
                + title_with([], || "html-native demo")
        })
        + body_with([], || {
            let mut main_contents = Fragment::new();
            for article in &articles {
                main_contents.push(article);
            }
            nav_with([], || {
                ul_with([], || {
                    Fragment::from_pieces(["first", "second"].iter().map(|name| {
                        li_with([opt_att("class", (*name == current).then(|| "current"))],
                                || a_with([att("href", format!("#{name}"))], || *name))
                    }))
                })
            })
            + main_with([], || main_contents)
            + form_with([att("action", "/search")], || {
                input([att("type", "search"), att("name", "q"),
                       bool_att("required"),
                       // dropped: not valid on input
                       bool_att("autoplay")])
                    + button_with(Attributes::new().with("type", "submit"), || "Search")
            })
            + when(!articles.is_empty(), || footer_with([], || &footer_note))
        })
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Check { tag, attribute } => {
            if Tag::from_name(&tag).is_err() {
                warn!("{tag:?} is not a supported element name");
            }
            writeln!(out, "{}", ATTRIBUTE_DB.is_valid(&tag, &attribute))?;
        }
        Command::Tags => {
            writeln!(out, "{}", Tag::all().map(|t| t.as_str()).join(" "))?;
        }
        Command::DumpDb => {
            let json = serde_json::to_string_pretty(&ATTRIBUTE_DB.to_json())
                .context("serializing the attribute database")?;
            writeln!(out, "{json}")?;
        }
        Command::Demo { document } => {
            let page = demo_page();
            if document {
                page.print_html_document(&mut out)?;
            } else {
                page.print_html_fragment(&mut out)?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
