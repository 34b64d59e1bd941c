/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::error::Error;
use std::io::stdout;
use std::path::{Path, PathBuf};

use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};
use log::{debug, error, info};

use emoji_catalog::catalog::EmojiCatalog;
use emoji_catalog::config::CatalogConfig;
use emoji_catalog::loadable::Loadable;
use emoji_catalog::tables::parser::parse_code_points;

enum Selection<'a> {
    Group(&'a str),
    SubGroup(&'a str)
}

fn selection_args<'a, 'b>(sub_command: App<'a, 'b>) -> App<'a, 'b> {
    sub_command
        .arg(Arg::with_name("group")
            .short("g")
            .long("group")
            .value_name("GROUP")
            .help("The name of a group, e.g. \"Smileys & Emotion\"")
            .takes_value(true))
        .arg(Arg::with_name("subgroup")
            .short("s")
            .long("subgroup")
            .value_name("SUBGROUP")
            .help("The name of a subgroup, e.g. \"face-smiling\"")
            .takes_value(true))
}

fn required_selection<'a, 'b>(sub_command: App<'a, 'b>) -> App<'a, 'b> {
    selection_args(sub_command)
        .group(ArgGroup::with_name("selection")
            .args(&["group", "subgroup"])
            .required(true))
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let app = App::new("emoji_catalog")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Constantin A. <emoji.builder@c1710.de>")
        .about("Queries the emojis listed in emoji-test.txt")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("assets")
            .short("a")
            .long("assets")
            .value_name("DIR")
            .help("The directory that contains emoji-test.txt")
            .long_help("The directory that contains emoji-test.txt. \
            If the file is missing there, a small built-in selection is used instead.")
            .takes_value(true)
            .global(true))
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("FILE")
            .help("A JSON or YAML configuration file")
            .takes_value(true)
            .global(true))
        .arg(Arg::with_name("seed")
            .long("seed")
            .value_name("NUMBER")
            .help("Seed for reproducible random choices")
            .takes_value(true)
            .global(true))
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Increases the log level (may be repeated)")
            .multiple(true)
            .global(true))
        .subcommand(selection_args(SubCommand::with_name("random")
            .about("Prints a random emoji (optionally out of a group or subgroup)"))
            .group(ArgGroup::with_name("selection")
                .args(&["group", "subgroup"])))
        .subcommand(SubCommand::with_name("groups")
            .about("Lists all groups"))
        .subcommand(SubCommand::with_name("subgroups")
            .about("Lists all subgroups"))
        .subcommand(required_selection(SubCommand::with_name("count")
            .about("Prints the number of emojis in a group or subgroup")))
        .subcommand(required_selection(SubCommand::with_name("show")
            .about("Prints all emojis of a group or subgroup")))
        .subcommand(required_selection(SubCommand::with_name("describe")
            .about("Prints one line of metadata per emoji of a group or subgroup")))
        .subcommand(required_selection(SubCommand::with_name("at")
            .about("Prints the emoji at a position inside a group or subgroup"))
            .arg(Arg::with_name("index")
                .help("The position, starting at 0")
                .required(true)))
        .subcommand(SubCommand::with_name("encode")
            .about("Encodes hexadecimal codepoints, e.g. 1F3F3 FE0F 200D 1F308")
            .arg(Arg::with_name("codepoints")
                .value_name("CODEPOINT")
                .required(true)
                .multiple(true)))
        .subcommand(SubCommand::with_name("export")
            .about("Writes all entries to stdout")
            .arg(Arg::with_name("format")
                .short("f")
                .long("format")
                .possible_values(&["json", "csv"])
                .default_value("json")));

    #[cfg(feature = "online")]
    let app = app.arg(Arg::with_name("download")
        .long("download")
        .value_name("VERSION")
        .help("Downloads emoji-test.txt for an emoji version (e.g. 15.0) from unicode.org")
        .conflicts_with("assets")
        .takes_value(true)
        .global(true));

    app
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_catalog(matches: &ArgMatches) -> Result<EmojiCatalog, Box<dyn Error>> {
    let mut config = match matches.value_of("config") {
        Some(config_file) => CatalogConfig::from_file(Path::new(config_file))?,
        None => CatalogConfig::default()
    };
    if let Some(assets) = matches.value_of("assets") {
        config.assets_path = Some(PathBuf::from(assets));
    }
    if let Some(seed) = matches.value_of("seed") {
        config.seed = Some(seed.parse()?);
    }
    debug!("Configuration: {:?}", config);

    #[cfg(feature = "online")]
    {
        if let Some(version) = matches.value_of("download") {
            let table = emoji_catalog::tables::online::load_online_table(parse_version(version)?)?;
            return Ok(EmojiCatalog::from_table_with_seed(table, config.seed));
        }
    }

    if config.assets_path.is_some() {
        Ok(EmojiCatalog::from_config(&config))
    } else {
        info!("No assets directory given, using the built-in definition");
        Ok(EmojiCatalog::from_table_with_seed(EmojiCatalog::embedded_table(), config.seed))
    }
}

#[cfg(feature = "online")]
fn parse_version(version: &str) -> Result<(u32, u32), Box<dyn Error>> {
    let mut parts = version.splitn(2, '.');
    let major = parts.next().unwrap_or_default().parse()?;
    let minor = match parts.next() {
        Some(minor) => minor.parse()?,
        None => 0
    };
    Ok((major, minor))
}

fn selection<'a>(matches: &'a ArgMatches) -> Option<Selection<'a>> {
    matches.value_of("group").map(Selection::Group)
        .or_else(|| matches.value_of("subgroup").map(Selection::SubGroup))
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let catalog = load_catalog(matches)?;

    match matches.subcommand() {
        ("random", Some(sub_matches)) => {
            let emoji = match selection(sub_matches) {
                Some(Selection::Group(group)) => catalog.random_emoji_from_group(group),
                Some(Selection::SubGroup(sub_group)) => catalog.random_emoji_from_sub_group(sub_group),
                None => catalog.random_emoji()
            };
            println!("{}", emoji);
        }
        ("groups", Some(_)) => catalog.group_names().iter()
            .for_each(|group| println!("{}", group)),
        ("subgroups", Some(_)) => catalog.sub_group_names().iter()
            .for_each(|sub_group| println!("{}", sub_group)),
        ("count", Some(sub_matches)) => match selection(sub_matches) {
            Some(Selection::Group(group)) => println!("{}", catalog.size_of_group(group)),
            Some(Selection::SubGroup(sub_group)) => println!("{}", catalog.size_of_sub_group(sub_group)),
            None => unreachable!("clap requires a group or subgroup")
        },
        ("show", Some(sub_matches)) => match selection(sub_matches) {
            Some(Selection::Group(group)) => println!("{}", catalog.emojis_from_group(group)),
            Some(Selection::SubGroup(sub_group)) => println!("{}", catalog.emojis_from_sub_group(sub_group)),
            None => unreachable!("clap requires a group or subgroup")
        },
        ("describe", Some(sub_matches)) => match selection(sub_matches) {
            Some(Selection::Group(group)) => print!("{}", catalog.group_description(group)),
            Some(Selection::SubGroup(sub_group)) => print!("{}", catalog.sub_group_description(sub_group)),
            None => unreachable!("clap requires a group or subgroup")
        },
        ("at", Some(sub_matches)) => {
            let index: usize = sub_matches.value_of("index").unwrap_or_default().parse()?;
            let emoji = match selection(sub_matches) {
                Some(Selection::Group(group)) => catalog.emoji_at_group(group, index),
                Some(Selection::SubGroup(sub_group)) => catalog.emoji_at_sub_group(sub_group, index),
                None => unreachable!("clap requires a group or subgroup")
            };
            match emoji {
                Some(emoji) => println!("{}", emoji),
                None => return Err(format!("There is no emoji at position {}", index).into())
            }
        }
        ("encode", Some(sub_matches)) => {
            let raw = sub_matches.values_of("codepoints")
                .map(|values| values.collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            println!("{}", catalog.encode(&parse_code_points(&raw))?);
        }
        ("export", Some(sub_matches)) => match sub_matches.value_of("format") {
            Some("csv") => catalog.table().write_csv(stdout())?,
            _ => {
                catalog.table().write_json(stdout())?;
                println!();
            }
        },
        _ => unreachable!("clap requires a subcommand")
    }
    Ok(())
}

fn main() {
    let matches = app().get_matches();
    init_logger(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
