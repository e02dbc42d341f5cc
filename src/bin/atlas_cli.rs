//! Inspect the built-in Web API catalog from a terminal.
//!
//! Examples:
//!   atlas-cli list
//!   atlas-cli show multimedia
//!   atlas-cli entry webAudio
//!   atlas-cli render /category/device > device.html
//!   atlas-cli export > catalog.json
//!   atlas-cli stats
//!   atlas-cli check
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=webapi_atlas=debug`).

use std::process;

use tracing_subscriber::EnvFilter;
use webapi_atlas::model::{ApiEntry, Category};
use webapi_atlas::views::html::render_page;
use webapi_atlas::views::{Page, Route};
use webapi_atlas::{catalog, Registry};

fn usage() -> ! {
    eprintln!("atlas-cli: browse the Web API catalog\n");
    eprintln!("Usage: atlas-cli [--json] <command> [args]\n");
    eprintln!("Commands:");
    eprintln!("  list                 Categories with entry counts");
    eprintln!("  show <category>      Entries of one category");
    eprintln!("  entry <entry-id>     One entry with support table and links");
    eprintln!("  render <route>       Static HTML for '/' or '/category/<id>'");
    eprintln!("  export               Whole catalog as JSON");
    eprintln!("  stats                Counts and unsupported cells per vendor");
    eprintln!("  check                Validate catalog invariants");
    process::exit(1);
}

struct Options {
    json: bool,
    args: Vec<String>,
}

fn parse_args() -> Options {
    let mut json = false;
    let args: Vec<String> = std::env::args()
        .skip(1)
        .filter(|a| {
            if a == "--json" {
                json = true;
                false
            } else {
                true
            }
        })
        .collect();

    if args.is_empty() {
        usage();
    }
    Options { json, args }
}

/// Commands whose output is HTML and so cannot honour `--json`.
const HTML_ONLY: &[&str] = &["render"];

fn rejects_json(cmd: &str) -> bool {
    HTML_ONLY.contains(&cmd)
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

fn print_entry_line(e: &ApiEntry) {
    let support: Vec<String> = e
        .support
        .iter()
        .map(|(v, s)| format!("{}={}", v.key(), s.label()))
        .collect();
    let demo = e.demo.id().map(|d| d.key()).unwrap_or("-");
    println!("  {:<22} {:<28} demo={:<16} {}", e.id, e.name, demo, support.join(" "));
}

fn print_category(c: &Category) {
    println!("{} ({}) - {}", c.name, c.id, c.description);
    for e in &c.entries {
        print_entry_line(e);
    }
}

#[cfg(feature = "serde")]
fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(&format!("serialize: {e}")),
    }
}

#[cfg(not(feature = "serde"))]
fn print_json<T>(_value: &T) {
    fail("JSON output requires the `serde` feature");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args();
    let cmd = opts.args[0].as_str();
    if opts.json && rejects_json(cmd) {
        fail(&format!("`{cmd}` does not support --json"));
    }

    // `check` validates the raw authored data instead of trusting `builtin()`.
    if cmd == "check" {
        match Registry::new(catalog::categories()) {
            Ok(reg) if opts.json => print_json(&reg.stats()),
            Ok(reg) => {
                let stats = reg.stats();
                println!(
                    "ok: {} categories, {} entries, {} demos",
                    stats.categories, stats.entries, stats.with_demo
                );
            }
            Err(e) => fail(&format!("invalid catalog: {e}")),
        }
        return;
    }

    let registry = Registry::builtin();

    match cmd {
        "list" => {
            if opts.json {
                let ids: Vec<_> = registry
                    .all()
                    .iter()
                    .map(|c| (c.id, c.name, c.entries.len()))
                    .collect();
                print_json(&ids);
            } else {
                for c in registry.all() {
                    println!("{:<14} {:<16} {} entries", c.id, c.name, c.entries.len());
                }
            }
        }
        "show" => {
            let Some(id) = opts.args.get(1) else { usage() };
            match registry.lookup(id) {
                Some(c) if opts.json => print_json(c),
                Some(c) => print_category(c),
                None => fail(webapi_atlas::views::NOT_FOUND_MESSAGE),
            }
        }
        "entry" => {
            let Some(id) = opts.args.get(1) else { usage() };
            let Some((cat, e)) = registry.find_entry(id) else {
                fail(&format!("no entry '{id}'"));
            };
            if opts.json {
                print_json(e);
            } else {
                println!("{} [{}] in {}", e.name, e.id, cat.name);
                println!("{}", e.description);
                for (v, s) in e.support.iter() {
                    println!("  {:<8} {}", v.display_name(), s.label());
                }
                println!("  docs:   {}", e.links.docs);
                println!("  compat: {}", e.links.compat);
                if let Some(d) = e.demo.id() {
                    println!("  demo:   {} ({})", d.title(), d.key());
                }
            }
        }
        "render" => {
            let path = opts.args.get(1).map(String::as_str).unwrap_or("/");
            let route = Route::parse(path).unwrap_or_else(|e| fail(&e.to_string()));
            print!("{}", render_page(&Page::for_route(&registry, &route)));
        }
        "export" => print_json(&registry.all()),
        "stats" if opts.json => print_json(&registry.stats()),
        "stats" => {
            let stats = registry.stats();
            println!(
                "categories={} entries={} with_demo={}",
                stats.categories, stats.entries, stats.with_demo
            );
            for (v, n) in stats.unsupported {
                println!("  unsupported on {:<8} {n}", v.display_name());
            }
        }
        _ => usage(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_render_refuses_json() {
        for cmd in ["list", "show", "entry", "export", "stats", "check"] {
            assert!(!rejects_json(cmd), "{cmd}");
        }
        assert!(rejects_json("render"));
    }
}
