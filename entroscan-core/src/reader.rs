//! Block readers: lazy, finite, non-restartable byte-block streams.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::debug;

/// Produces the block stream of one file.
///
/// The returned iterator yields non-empty blocks of at most the configured
/// block size; the final block may be shorter. A file that cannot be opened
/// or is empty yields zero blocks; the classifier turns that into a
/// `Neither` verdict, since a read failure carries no information.
pub trait BlockReader {
    fn open(&self, path: &Path) -> Box<dyn Iterator<Item = Vec<u8>>>;
}

/// Filesystem-backed `BlockReader`.
#[derive(Debug, Clone)]
pub struct FsBlockReader {
    block_size: usize,
}

impl FsBlockReader {
    pub fn new(block_size: usize) -> Self {
        Self { block_size }
    }
}

impl BlockReader for FsBlockReader {
    fn open(&self, path: &Path) -> Box<dyn Iterator<Item = Vec<u8>>> {
        match File::open(path) {
            Ok(file) => Box::new(FileBlocks {
                file,
                block_size: self.block_size,
                done: false,
            }),
            Err(e) => {
                debug!("Cannot open {}: {e}", path.display());
                Box::new(std::iter::empty())
            }
        }
    }
}

struct FileBlocks {
    file: File,
    block_size: usize,
    done: bool,
}

impl Iterator for FileBlocks {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.done {
            return None;
        }

        let mut buf = vec![0u8; self.block_size];
        let mut filled = 0;

        while filled < buf.len() {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    // Mid-stream read failure ends the stream; blocks
                    // already yielded stand.
                    debug!("Read error mid-stream: {e}");
                    self.done = true;
                    break;
                }
            }
        }

        if filled == 0 {
            self.done = true;
            return None;
        }

        buf.truncate(filled);
        Some(buf)
    }
}
