// SPDX-License-Identifier: MPL-2.0
use scubba_site::application::services::service_cards;
use scubba_site::application::{BookingIntake, Direction, GalleryEngine};
use scubba_site::catalog::PhotoCatalog;
use scubba_site::config;
use scubba_site::domain::gallery::Category;
use scubba_site::error::{Error, Result};
use scubba_site::i18n::I18n;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
scubba_site

USAGE:
  scubba_site [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Display language (en, es)
  --catalog <PATH>      Gallery catalog TOML replacing the embedded one
  --category <TAG>      Gallery filter (all, divers, marine, landscapes, vibes)
  --open <INDEX>        Open the lightbox on the INDEX-th visible photo
  --next <N>            Step the lightbox forward N times (negative steps back)
  --service <TAG>       Booking deep-link service tag
  --services            List the services catalog
  -h, --help            Print help
";

struct Args {
    lang: Option<String>,
    catalog: Option<PathBuf>,
    category: Option<String>,
    open: Option<usize>,
    next: i32,
    service: Option<String>,
    services: bool,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str("--catalog")?,
        category: args.opt_value_from_str("--category")?,
        open: args.opt_value_from_str("--open")?,
        next: args.opt_value_from_str("--next")?.unwrap_or(0),
        service: args.opt_value_from_str("--service")?,
        services: args.contains("--services"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unused arguments");
    }
    Ok(Some(parsed))
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using default settings");
        config::Config::default()
    });
    if args.catalog.is_some() {
        config.catalog_path = args.catalog;
    }

    let i18n = I18n::new(args.lang, &config);
    let catalog = PhotoCatalog::load(&config)?;

    let category = args
        .category
        .or_else(|| config.default_category.clone())
        .map(|tag| tag.parse::<Category>())
        .transpose()
        .map_err(|err| Error::Config(err.to_string()))?
        .unwrap_or_default();
    let mut gallery = GalleryEngine::with_filter(catalog, category);

    println!("{}", i18n.tr("gallery-title"));
    let filters: Vec<String> = Category::ALL
        .into_iter()
        .map(|category| {
            let label = i18n.tr(category.i18n_key());
            if gallery.is_active(category) {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    println!("{}", filters.join("  "));

    {
        let visible = gallery.visible_photos();
        if visible.is_empty() {
            println!("{}", i18n.tr("gallery-empty"));
        }
        for (index, photo) in visible.iter().enumerate() {
            println!("{index:>4}  {}  ({})", photo.source, photo.alt_text);
        }
    }

    let videos = gallery.catalog().videos();
    if !videos.is_empty() {
        println!();
        println!("{}", i18n.tr("gallery-videos-title"));
        for video in videos {
            println!("      {}  ({})", video.source, i18n.tr(&video.title_key));
        }
    }

    if let Some(index) = args.open {
        if let Err(err) = gallery.open_lightbox(index) {
            eprintln!("{}", i18n.tr(err.i18n_key()));
            return Err(err.into());
        }
        let direction = if args.next < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        for _ in 0..args.next.unsigned_abs() {
            gallery.navigate(direction);
        }
        if let Some(session) = gallery.lightbox().session() {
            let mut position = fluent_bundle::FluentArgs::new();
            position.set("index", session.index() + 1);
            position.set("total", session.len());
            println!();
            println!(
                "{}  {}  ({})",
                i18n.tr_with_args("gallery-position", &position),
                session.current().source,
                session.current().alt_text
            );
        }
        gallery.close_lightbox();
    }

    if args.services {
        println!();
        println!("{}", i18n.tr("services-title"));
        for card in service_cards(&i18n) {
            println!("- {} ({})  {}", card.name, card.subtitle, card.booking_href);
            if let Some(limit) = card.group_limit {
                println!("    {limit}");
            }
        }
    }

    if let Some(service) = args.service {
        let intake = BookingIntake::from_service_param(Some(service.as_str()));
        let selected = intake
            .selected_service()
            .map_or_else(|| i18n.tr("booking-service-placeholder"), |tag| i18n.tr(&tag.option_key()));
        println!();
        println!("{}: {}", i18n.tr("booking-service"), selected);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "scubba_site failed");
            ExitCode::FAILURE
        }
    }
}
