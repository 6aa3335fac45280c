use std::{io::Read, path::PathBuf};
use clap::{Parser, Subcommand};

use asvocab::{BaseType, Catalog, Entity, Resolver, LD};


#[derive(Parser)]
/// typed activitystreams documents, resolved and normalized
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	/// read a document, resolve it and print it back normalized
	Normalize {
		/// document to read, stdin if not given
		file: Option<PathBuf>,

		#[arg(long = "as")]
		/// resolve document as this type, ignoring its own type tags
		kind: Option<String>,

		#[arg(long, default_value_t=false)]
		/// attach activitystreams @context to output, overrides config value
		context: bool,
	},

	/// show which branch every property of a document resolved into
	Inspect {
		/// document to read, stdin if not given
		file: Option<PathBuf>,

		#[arg(long = "as")]
		/// resolve document as this type, ignoring its own type tags
		kind: Option<String>,
	},

	/// list every known type with its capabilities
	Types,
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_writer(std::io::stderr)
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = asvocab::Config::load(args.config.as_ref());

	match args.command {
		Mode::Config =>
			println!("{}", toml::to_string_pretty(&config).expect("failed serializing config")),

		Mode::Types => {
			for kind in BaseType::variants() {
				let capabilities = kind.capabilities()
					.into_iter()
					.map(|x| x.name())
					.collect::<Vec<_>>()
					.join(", ");
				println!("{kind}\t{capabilities}");
			}
		},

		Mode::Normalize { file, kind, context } => {
			let entity = load(&config, file.as_ref(), kind.as_deref());
			let mut out = entity.to_json()
				.unwrap_or_else(|e| fail(&format!("failed serializing document: {e}")));
			if context || config.output.context {
				out = out.ld_context();
			}
			let out = if config.output.pretty {
				serde_json::to_string_pretty(&out)
			} else {
				serde_json::to_string(&out)
			};
			println!("{}", out.expect("failed serializing json"));
		},

		Mode::Inspect { file, kind } => {
			let entity = load(&config, file.as_ref(), kind.as_deref());
			inspect(&entity, 0);
		},
	}
}

fn fail(msg: &str) -> ! {
	tracing::error!("{msg}");
	std::process::exit(1)
}

fn load(config: &asvocab::Config, file: Option<&PathBuf>, kind: Option<&str>) -> Entity {
	let mut raw = String::new();
	let res = match file {
		Some(path) => std::fs::File::open(path).and_then(|mut x| x.read_to_string(&mut raw)),
		None => std::io::stdin().read_to_string(&mut raw),
	};
	if let Err(e) = res {
		fail(&format!("failed reading document: {e}"));
	}

	let document : serde_json::Value = serde_json::from_str(&raw)
		.unwrap_or_else(|e| fail(&format!("document is not valid json: {e}")));

	let resolver = Resolver::from_config(&config.resolver);
	let res = match kind {
		None => resolver.entity(&document),
		Some(tag) => match Catalog::from(&config.resolver).kind(tag) {
			Some(kind) => resolver.entity_as(kind, &document),
			None => fail(&format!("'{tag}' is not a known type")),
		},
	};

	match res {
		Ok(entity) => entity,
		Err(e) => {
			let path = e.path();
			if !path.is_empty() {
				tracing::debug!("failure at {}", path.join("."));
			}
			fail(&format!("failed resolving document: {e}"))
		},
	}
}

fn inspect(entity: &Entity, depth: usize) {
	let pad = "  ".repeat(depth);
	println!("{pad}{} (types: {})", entity.kind(), entity.type_tags().join(", "));
	for slot in entity.properties() {
		if !slot.is_populated() {
			continue;
		}
		for (i, value) in slot.iter().enumerate() {
			match value.entity() {
				Some(inner) => {
					println!("{pad}  {}[{i}] -> {}", slot.name(), value.kind_name());
					inspect(inner, depth + 2);
				},
				None => match value.id() {
					Some(id) => println!("{pad}  {}[{i}] -> {} {id}", slot.name(), value.kind_name()),
					None => println!("{pad}  {}[{i}] -> {}", slot.name(), value.kind_name()),
				},
			}
		}
		if let Some(languages) = slot.language_map() {
			let tags = languages.keys().cloned().collect::<Vec<_>>().join(", ");
			println!("{pad}  {} -> language map [{tags}]", slot.spec().map_key());
		}
	}
	for key in entity.unknown().keys() {
		println!("{pad}  {key} -> unknown");
	}
}
