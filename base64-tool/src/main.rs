mod codec;

use std::env;

const SKIP_CHALLENGE_PATH: usize = 1;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Command::parse(env::args().skip(SKIP_CHALLENGE_PATH)) {
        Command::Encode {
            input_file,
            output_file,
        } => codec::encode_file(&input_file, &output_file),
        Command::Decode {
            input_file,
            output_file,
        } => codec::decode_file(&input_file, &output_file),
        Command::Usage => {
            print_usage();
            Ok(())
        }
        Command::InvalidMode(mode) => {
            println!("The mode must be `e` or `d`, got `{mode}`");
            Ok(())
        }
    }
}

fn print_usage() {
    println!("Usage: base64-tool <mode> <input-file> <output-file>");
    println!("  mode `e` encodes the input file's bytes to base64 text");
    println!("  mode `d` decodes the input file's base64 text back to bytes");
    println!("The result is written to the output file.");
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Encode {
        input_file: String,
        output_file: String,
    },
    Decode {
        input_file: String,
        output_file: String,
    },
    Usage,
    InvalidMode(String),
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let (Some(mode), Some(input_file), Some(output_file)) =
            (args.next(), args.next(), args.next())
        else {
            return Command::Usage;
        };

        match mode.as_str() {
            "e" => Command::Encode {
                input_file,
                output_file,
            },
            "d" => Command::Decode {
                input_file,
                output_file,
            },
            _ => Command::InvalidMode(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Command;

    fn parse(args: &[&str]) -> Command {
        Command::parse(args.iter().map(ToString::to_string))
    }

    #[rstest]
    #[case(&[])]
    #[case(&["e"])]
    #[case(&["e", "input.bin"])]
    fn too_few_arguments_ask_for_usage(#[case] args: &[&str]) {
        assert_eq!(parse(args), Command::Usage);
    }

    #[rstest]
    #[case("x")]
    #[case("encode")]
    #[case("E")]
    fn unknown_modes_are_rejected(#[case] mode: &str) {
        assert_eq!(
            parse(&[mode, "input.bin", "output.txt"]),
            Command::InvalidMode(mode.to_string())
        );
    }

    #[test]
    fn parses_encode_and_decode() {
        assert_eq!(
            parse(&["e", "input.bin", "output.txt"]),
            Command::Encode {
                input_file: "input.bin".to_string(),
                output_file: "output.txt".to_string(),
            }
        );
        assert_eq!(
            parse(&["d", "output.txt", "roundtrip.bin"]),
            Command::Decode {
                input_file: "output.txt".to_string(),
                output_file: "roundtrip.bin".to_string(),
            }
        );
    }
}
