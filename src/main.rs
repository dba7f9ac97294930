//! voxsculpt - run a scene script and export the sculpture

use std::path::PathBuf;

use voxsculpt::core::logging;
use voxsculpt::export::ExportFormat;
use voxsculpt::script::SculptScript;

#[derive(Debug)]
struct Args {
    script: PathBuf,
    outputs: Vec<PathBuf>,
    print: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);

    let mut script: Option<PathBuf> = None;
    let mut outputs = Vec::new();
    let mut print = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => match args.next() {
                Some(v) => outputs.push(PathBuf::from(v)),
                None => return Err(format!("{} needs a path", arg)),
            },
            "--print" => {
                print = true;
            }
            "-h" | "--help" | "help" => {
                return Err("show_help".to_string());
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {}", other));
            }
            other => {
                if script.is_some() {
                    return Err(format!("unexpected argument: {}", other));
                }
                script = Some(PathBuf::from(other));
            }
        }
    }

    let script = script.ok_or_else(|| "missing scene script".to_string())?;
    Ok(Args { script, outputs, print })
}

fn print_help() {
    println!("voxsculpt - voxel sculpting from a scene script");
    println!();
    println!("Usage: voxsculpt <SCRIPT.json> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -o, --output <PATH>   Extra export target, .vect or .off (repeatable)");
    println!("  --print               Print the activation flags plane by plane");
    println!("  -h, --help            Show this help");
    println!();
    println!("Examples:");
    println!("  voxsculpt scene.json");
    println!("  voxsculpt scene.json -o shell.off --print");
}

fn run(args: Args) -> voxsculpt::core::Result<()> {
    let mut script = SculptScript::load(&args.script)?;
    script.outputs.extend(args.outputs);

    let grid = script.run()?;
    if args.print {
        print!("{}", grid);
    }

    let dims = grid.dims();
    log::info!(
        "{}: {}x{}x{} grid, {} visible voxels, {} file(s) written",
        args.script.display(),
        dims.nx,
        dims.ny,
        dims.nz,
        grid.active_count(),
        script.outputs.len()
    );
    for path in &script.outputs {
        if let Some(format) = ExportFormat::from_path(path) {
            log::debug!("  {} -> {}", format.name(), path.display());
        }
    }
    Ok(())
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            if e == "show_help" {
                print_help();
                return;
            }
            eprintln!("Error: {}", e);
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
