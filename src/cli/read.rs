use std::{path::PathBuf, str::FromStr};

use belief_base::{base::BeliefBase, types::err::ErrorKind};

pub(super) enum ReadError {
    NoPath,
    ParseError(ErrorKind),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a belief file is required."),
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
            Self::FailedToOpen => write!(f, "Failed to open belief file."),
        }
    }
}

/// Reads the belief file at `path` to `base` and writes a report.
pub(super) fn read_beliefs(path: Option<&String>, base: &mut BeliefBase) -> Result<(), ReadError> {
    let path = match path.map(|path| PathBuf::from_str(path)) {
        Some(Ok(path)) => path,
        _ => return Err(ReadError::NoPath),
    };

    println!("c Reading beliefs from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            base.read_beliefs(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => base.read_beliefs(std::io::BufReader::new(&file)),
    };

    match parse_report {
        Ok(info) => {
            println!("c Beliefs read:     {}", info.beliefs);
            println!("c Beliefs added:    {}", info.added);
            println!("c Duplicates:       {}", info.duplicates);
            Ok(())
        }
        Err(e) => Err(ReadError::ParseError(e)),
    }
}
