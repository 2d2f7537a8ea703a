// ABOUTME: CLI for inspecting site content with folio-content.
// ABOUTME: Lists published items, related items, and meta descriptions as JSON.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use folio_content::{
    build_description_with, find_by_slug, listing, load_collection, related_for_slug, Collection,
    ContentItem, DirectorySource, SiteOptions, SiteOptionsBuilder,
};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect blog posts and notes the way the site renders them.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Query site content and print JSON", long_about = None)]
struct Args {
    /// Content root holding one directory per collection.
    #[arg(long, global = true, default_value = "src/content")]
    root: PathBuf,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List items of a collection, newest first.
    List {
        collection: Collection,

        /// Include drafts.
        #[arg(long, default_value_t = false)]
        all: bool,
    },

    /// Show items related to SLUG by shared tags.
    Related {
        collection: Collection,
        slug: String,

        /// Maximum number of related items.
        #[arg(long, default_value_t = folio_content::DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },

    /// Print the meta description for SLUG.
    Describe {
        collection: Collection,
        slug: String,

        /// Body excerpt length used when the item has no description.
        #[arg(long, default_value_t = 120)]
        length: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let output = run(&args)?;

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn run(args: &Args) -> Result<Value> {
    let builder = SiteOptionsBuilder::new().content_root(&args.root);

    match &args.command {
        Command::List { collection, all } => {
            let opts = builder.include_drafts(*all).build();
            let source = DirectorySource::new(opts.clone());
            let items = listing(&source, &opts, *collection)
                .with_context(|| format!("loading {collection} from {}", args.root.display()))?;
            debug!(%collection, count = items.len(), "listing");
            Ok(json!({
                "collection": collection,
                "total": items.len(),
                "items": items.iter().map(summary).collect::<Vec<_>>(),
            }))
        }
        Command::Related {
            collection,
            slug,
            limit,
        } => {
            let opts = builder.related_limit(*limit).build();
            let source = DirectorySource::new(opts.clone());
            let related = related_for_slug(&source, &opts, *collection, slug)
                .with_context(|| format!("loading {collection} from {}", args.root.display()))?
                .ok_or_else(|| anyhow!("no published {collection} item with slug {slug:?}"))?;
            Ok(json!({
                "slug": slug,
                "related": related.iter().map(summary).collect::<Vec<_>>(),
            }))
        }
        Command::Describe {
            collection,
            slug,
            length,
        } => {
            let opts = builder.description_length(*length).build();
            let items = load(&opts, *collection)?;
            let item = find_by_slug(&items, slug)
                .ok_or_else(|| anyhow!("no {collection} item with slug {slug:?}"))?;
            Ok(json!({
                "slug": slug,
                "description": build_description_with(item, &opts.description),
            }))
        }
    }
}

fn load(opts: &SiteOptions, collection: Collection) -> Result<Vec<ContentItem>> {
    let dir = opts.collection_dir(collection);
    load_collection(&dir, collection).with_context(|| format!("loading {}", dir.display()))
}

fn summary(item: &ContentItem) -> Value {
    json!({
        "slug": item.slug,
        "title": item.data.title,
        "date": item.data.date,
        "tags": item.data.tags,
        "draft": item.data.draft,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("folio=warn,folio_content=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
