// Debug tool to print a constructed symbol and its mask penalties
use clap::{Parser, ValueEnum};
use rust_qr_encode::{ECLevel, Encoder, MaskPattern, Version, num_data_codewords};
use std::process::ExitCode;

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    L,
    M,
    Q,
    H,
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => ECLevel::L,
            Level::M => ECLevel::M,
            Level::Q => ECLevel::Q,
            Level::H => ECLevel::H,
        }
    }
}

#[derive(Parser)]
#[command(name = "debug_matrix", about = "Build a QR symbol and dump it as text")]
struct Cli {
    /// Symbol version (1-40)
    #[arg(long, default_value_t = 1)]
    qr_version: u8,
    /// Error correction level
    #[arg(long, value_enum, default_value_t = Level::L)]
    level: Level,
    /// Data codewords as hex; padded with 0xEC/0x11 to the data capacity
    #[arg(long, default_value = "")]
    hex: String,
    /// Force a mask pattern (0-7)
    #[arg(long)]
    mask: Option<i32>,
    /// Score mask candidates in parallel
    #[arg(long)]
    parallel: bool,
    /// Also list rule-1 runs and finder-like hits for the chosen mask
    #[arg(long)]
    details: bool,
}

fn parse_hex(hex: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<char> = hex.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex input must have an even number of digits".to_string());
    }
    digits
        .chunks(2)
        .map(|pair| {
            let s: String = pair.iter().collect();
            u8::from_str_radix(&s, 16).map_err(|e| format!("invalid hex byte {s:?}: {e}"))
        })
        .collect()
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let ec_level = ECLevel::from(cli.level);
    let version = Version::new(cli.qr_version).map_err(|e| e.to_string())?;
    let capacity = num_data_codewords(version, ec_level);

    let mut data = parse_hex(&cli.hex)?;
    if data.len() > capacity {
        return Err(format!(
            "{} data codewords exceed capacity {} for version {} level {:?}",
            data.len(),
            capacity,
            version.number(),
            ec_level
        ));
    }
    for pad in [0xEC, 0x11].into_iter().cycle() {
        if data.len() >= capacity {
            break;
        }
        data.push(pad);
    }

    let mut encoder = Encoder::new().parallel(cli.parallel);
    if let Some(index) = cli.mask {
        let mask = MaskPattern::try_from(index).map_err(|e| e.to_string())?;
        encoder = encoder.with_mask(mask);
    }
    let symbol = encoder
        .encode(version.number(), ec_level, &data)
        .map_err(|e| e.to_string())?;

    println!(
        "Version {} ({}x{}), level {:?}, mask {}",
        symbol.version.number(),
        symbol.size(),
        symbol.size(),
        symbol.error_correction,
        symbol.mask_pattern.index()
    );
    println!();
    print!("{}", symbol.modules.to_text("##", "  "));
    println!();

    println!("mask   total   runs  blocks  finder  balance  dark");
    for (i, report) in symbol.penalties.iter().enumerate() {
        let marker = if i == symbol.mask_pattern.index() as usize { "*" } else { " " };
        println!(
            "{}{:>3} {:>7} {:>6} {:>7} {:>7} {:>8} {:>5}",
            marker,
            i,
            report.total(),
            report.run_penalty,
            report.block_penalty,
            report.finder_penalty,
            report.balance_penalty,
            report.dark_modules
        );
    }

    if cli.details {
        let report = &symbol.penalties[symbol.mask_pattern.index() as usize];
        println!();
        for run in &report.horizontal_runs {
            println!(
                "  row {:>3}: run of {} {} at column {}",
                run.line,
                run.length,
                if run.dark { "dark" } else { "light" },
                run.start
            );
        }
        for run in &report.vertical_runs {
            println!(
                "  col {:>3}: run of {} {} at row {}",
                run.line,
                run.length,
                if run.dark { "dark" } else { "light" },
                run.start
            );
        }
        for hit in &report.horizontal_finder_like {
            println!("  row {:>3}: finder-like (unit {}) ending at {}", hit.line, hit.unit, hit.end);
        }
        for hit in &report.vertical_finder_like {
            println!("  col {:>3}: finder-like (unit {}) ending at {}", hit.line, hit.unit, hit.end);
        }
    }

    Ok(())
}
