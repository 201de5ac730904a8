#![allow(missing_docs)]

use tagframe::config::{ResourceOptions, TagOptions};
use tagframe::file::{TagVersion, TaggedFile};
use tagframe::resource::ResourceManager;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "frame_dump", about = "Print the tags of audio files as frames")]
struct Opt {
	/// Only print the legacy (ID3v1) tag
	#[structopt(long)]
	v1: bool,

	/// Only print the primary tag
	#[structopt(long)]
	v2: bool,

	/// Print the fields of every frame
	#[structopt(short, long)]
	fields: bool,

	#[structopt(parse(from_os_str))]
	paths: Vec<PathBuf>,
}

fn dump(
	file: &mut TaggedFile,
	version: TagVersion,
	show_fields: bool,
) -> tagframe::error::Result<()> {
	let Some(format) = file.tag_format(version)? else {
		println!("--- {version:?}: none ---");
		return Ok(());
	};

	println!("--- {version:?}: {format} ---");
	for frame in &file.frames(version)? {
		println!(
			"{:<24} {:<20} {}",
			frame.ty().name(),
			frame.name(),
			frame.display_value()
		);

		if show_fields {
			for field in frame.fields() {
				println!(
					"{:>46}{:?}: {}",
					"",
					field.id,
					field.value.to_display_string()
				);
			}
		}
	}

	Ok(())
}

fn main() {
	let opt = Opt::from_args();

	let versions = match (opt.v1, opt.v2) {
		(true, false) => vec![TagVersion::V1],
		(false, true) => vec![TagVersion::V2],
		_ => vec![TagVersion::V2, TagVersion::V1],
	};

	let mut manager = ResourceManager::new(ResourceOptions::default());
	let ids = opt
		.paths
		.iter()
		.map(|path| manager.insert(TaggedFile::new(path, TagOptions::default())))
		.collect::<Vec<_>>();

	for id in ids {
		let file = match manager.open(id) {
			Ok(file) => file,
			Err(e) => {
				eprintln!("ERROR: {e}");
				continue;
			},
		};

		println!("=== {} ===", file.path().display());
		match file.detail_info() {
			Ok(info) => println!("{info}"),
			Err(e) => eprintln!("ERROR: {e}"),
		}

		for &version in &versions {
			if let Err(e) = dump(file, version, opt.fields) {
				eprintln!("ERROR: {e}");
			}
		}
	}
}
