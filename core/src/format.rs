use crate::block::{Block, HeaderKind};
use crate::{BASIC_HEADER_SIZE, BASIC_NAME_LEN, BASIC_SYNC_BYTE, BASIC_SYNC_LEN};

/// Tape image layout, as far as block planning is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapeFormat {
    /// BASIC program: 10 sync bytes, 6 byte name, then the program body
    Basic { name: [u8; BASIC_NAME_LEN] },
    /// Anything else, sent as a single block
    Binary,
}

type Classifier = fn(&[u8]) -> Option<TapeFormat>;

/// Classifiers tried in order; the first match wins, `Binary` otherwise.
const CLASSIFIERS: &[Classifier] = &[classify_basic];

fn classify_basic(buf: &[u8]) -> Option<TapeFormat> {
    if buf.len() < BASIC_HEADER_SIZE {
        return None;
    }
    if !buf[..BASIC_SYNC_LEN].iter().all(|&b| b == BASIC_SYNC_BYTE) {
        return None;
    }

    let mut name = [0u8; BASIC_NAME_LEN];
    name.copy_from_slice(&buf[BASIC_SYNC_LEN..BASIC_HEADER_SIZE]);
    Some(TapeFormat::Basic { name })
}

/// Sniff the leading bytes of a tape image
pub fn classify(buf: &[u8]) -> TapeFormat {
    CLASSIFIERS
        .iter()
        .find_map(|classifier| classifier(buf))
        .unwrap_or(TapeFormat::Binary)
}

impl TapeFormat {
    /// Embedded program name, if the format carries one
    pub fn name(&self) -> Option<&[u8]> {
        match self {
            TapeFormat::Basic { name } => Some(name),
            TapeFormat::Binary => None,
        }
    }

    /// Name for display: cut at the first NUL, invalid UTF-8 replaced
    pub fn name_lossy(&self) -> Option<String> {
        self.name().map(|name| {
            let end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
            String::from_utf8_lossy(&name[..end]).into_owned()
        })
    }

    /// One-line human readable description
    pub fn describe(&self) -> String {
        match self.name_lossy() {
            Some(name) => format!("BASIC file \"{}\"", name),
            None => "binary data".to_string(),
        }
    }

    /// Split `buf` into the blocks that go on tape.
    ///
    /// BASIC: the 16 byte header under a long preamble, then the body (if any)
    /// under a short one. Binary: everything under a long preamble. A buffer
    /// shorter than the BASIC header goes out as one long block either way.
    pub fn plan<'a>(&self, buf: &'a [u8]) -> Vec<Block<'a>> {
        match self {
            TapeFormat::Basic { .. } => {
                let (header, body) = buf.split_at(BASIC_HEADER_SIZE.min(buf.len()));
                let mut blocks = vec![Block::new(HeaderKind::Long, header)];
                if !body.is_empty() {
                    blocks.push(Block::new(HeaderKind::Short, body));
                }
                blocks
            }
            TapeFormat::Binary => vec![Block::new(HeaderKind::Long, buf)],
        }
    }
}
