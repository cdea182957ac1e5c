//! gurmukhi - 구르무키 로마자 변환 / 레거시 디코딩 CLI

use std::io::{self, Read};
use std::process;

use clap::Parser;

use gurmukhi_translit::config::{config_path, load_config, save_config, TranslitConfig};
use gurmukhi_translit::core::anmollipi::legacy_key_chars;
use gurmukhi_translit::core::converter::{convert_with_diagnostics, Style};
use gurmukhi_translit::core::error::TranslitError;
use gurmukhi_translit::core::legacy::{decode_legacy, SUPPORTED_LEGACY_ENCODINGS};
use gurmukhi_translit::detection::{detect_input_kind, InputKind};
use gurmukhi_translit::request::handle_json;

#[derive(Parser)]
#[command(
    name = "gurmukhi",
    version,
    about = "Gurmukhi transliteration: ISO 15919, practical romanization, AnmolLipi decoding"
)]
struct Cli {
    /// Text to convert (reads stdin when omitted)
    text: Option<String>,
    /// Output style: iso15919, practical or legacy (with --json the request names its own style)
    #[arg(short, long)]
    style: Option<String>,
    /// Legacy encoding name
    #[arg(short, long)]
    encoding: Option<String>,
    /// Treat input as a JSON request {"text", "style"} and print a JSON response
    #[arg(long)]
    json: bool,
    /// Decode AnmolLipi input before romanizing (overrides the config file)
    #[arg(long, overrides_with = "no_auto")]
    auto: bool,
    /// Never decode AnmolLipi input before romanizing (overrides the config file)
    #[arg(long, overrides_with = "auto")]
    no_auto: bool,
    /// Print skipped characters to stderr
    #[arg(long)]
    report: bool,
    /// Print the supported legacy encodings and their key characters and exit
    #[arg(long)]
    list_keys: bool,
    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// 설정 파일 값 위에 명령행 옵션을 덮어쓴 설정
    fn effective_config(&self, config: TranslitConfig) -> Result<TranslitConfig, TranslitError> {
        let default_style = match self.style.as_deref() {
            Some(name) => name.parse::<Style>()?,
            None => config.default_style,
        };
        let decode_legacy_input = if self.auto {
            true
        } else if self.no_auto {
            false
        } else {
            config.decode_legacy_input
        };
        Ok(TranslitConfig {
            default_style,
            legacy_encoding: self
                .encoding
                .clone()
                .unwrap_or(config.legacy_encoding),
            decode_legacy_input,
            ..config
        })
    }
}

fn read_input(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches(&['\r', '\n'][..]).to_string())
        }
    }
}

fn run(cli: Cli, config: TranslitConfig) -> Result<(), TranslitError> {
    let config = cli.effective_config(config)?;

    if cli.list_keys {
        let keys: String = legacy_key_chars().into_iter().collect();
        for encoding in SUPPORTED_LEGACY_ENCODINGS {
            println!("{}: {}", encoding, keys);
        }
        return Ok(());
    }

    if cli.save_config {
        if let Err(e) = save_config(&config) {
            eprintln!("{}", e);
            process::exit(1);
        }
        println!("{}", config_path().display());
        return Ok(());
    }

    let input = match read_input(cli.text) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("failed to read input: {}", e);
            process::exit(1);
        }
    };

    if cli.json {
        println!("{}", handle_json(&input, &config));
        return Ok(());
    }

    let style = config.default_style;
    let encoding = config.legacy_encoding.as_str();
    let decode_first = style != Style::Legacy
        && config.decode_legacy_input
        && detect_input_kind(&input) == InputKind::Legacy;
    let text = if decode_first {
        log::debug!("decoding {} input before {}", encoding, style);
        decode_legacy(&input, encoding)?
    } else {
        input
    };

    let conversion = convert_with_diagnostics(&text, style, encoding)?;
    println!("{}", conversion.output);

    if cli.report {
        for unmapped in &conversion.unmapped {
            eprintln!("{}", unmapped);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let config = load_config();

    // 로깅 초기화 (RUST_LOG가 없으면 설정 파일의 레벨)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Err(e) = run(cli, config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
