//! K-way merge of sorted word streams
//!
//! Every whitespace-separated word from every input goes through one
//! [`Queue`] ordered lexicographically, then the queue is drained. The inputs
//! do not actually have to be sorted; the output always is.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::queue::Queue;
use crate::traits::PriorityQueue;

/// Reads all words from `inputs` and returns them in ascending order
///
/// Input must be UTF-8. Words are compared as Rust strings, so bytes that
/// do not decode are rejected rather than passed through.
///
/// # Errors
/// Propagates the first I/O error raised by any reader, including
/// [`io::ErrorKind::InvalidData`] for a line that is not valid UTF-8.
pub fn merge_words<R, I>(inputs: I) -> io::Result<Vec<String>>
where
    R: BufRead,
    I: IntoIterator<Item = R>,
{
    let mut queue = Queue::new(|a: &String, b: &String| a < b);

    for (n, input) in inputs.into_iter().enumerate() {
        let before = queue.len();
        for line in input.lines() {
            queue.extend(line?.split_whitespace().map(str::to_owned));
        }
        debug!("input {} contributed {} word(s)", n, queue.len() - before);
    }

    Ok(queue.into_sorted_vec())
}

/// Writes `words` separated by single spaces and followed by a newline
///
/// Nothing is written for an empty slice, not even the newline.
pub fn write_joined<W: Write, S: AsRef<str>>(out: &mut W, words: &[S]) -> io::Result<()> {
    let Some((first, rest)) = words.split_first() else {
        return Ok(());
    };

    out.write_all(first.as_ref().as_bytes())?;
    for word in rest {
        out.write_all(b" ")?;
        out.write_all(word.as_ref().as_bytes())?;
    }
    out.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_two_sorted_lists() {
        let a = "apple cherry\nfig".as_bytes();
        let b = "banana\n  date elderberry ".as_bytes();

        let merged = merge_words([a, b]).unwrap();
        assert_eq!(
            merged,
            vec!["apple", "banana", "cherry", "date", "elderberry", "fig"]
        );
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let merged = merge_words(["b a", "a c b"].map(str::as_bytes)).unwrap();
        assert_eq!(merged, vec!["a", "a", "b", "b", "c"]);
    }

    #[test]
    fn test_merge_no_inputs() {
        let merged = merge_words(Vec::<&[u8]>::new()).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_rejects_invalid_utf8() {
        let good = "apple".as_bytes();
        let bad: &[u8] = b"pear \xff\xfe\n";

        let err = merge_words([good, bad]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_write_joined() {
        let mut out = Vec::new();
        write_joined(&mut out, &["a", "b", "c"]).unwrap();
        assert_eq!(out, b"a b c\n");
    }

    #[test]
    fn test_write_joined_empty_writes_nothing() {
        let mut out = Vec::new();
        write_joined::<_, &str>(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
