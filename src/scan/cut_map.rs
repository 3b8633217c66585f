use crate::engine::Classifier;

/// Per-byte record of where separator code points start.
///
/// Every offset holds either 0 or the UTF-8 length of the separator that starts
/// there. Continuation bytes and bytes of invalid sequences are always 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutMap {
    cuts: Vec<u8>,
}

impl CutMap {
    pub fn build(content: &[u8], classifier: &Classifier) -> Self {
        let mut cuts = vec![0u8; content.len()];
        let mut offset = 0;

        for chunk in content.utf8_chunks() {
            let valid = chunk.valid();
            for (i, c) in valid.char_indices() {
                if classifier.is_separator(c) {
                    cuts[offset + i] = c.len_utf8() as u8;
                }
            }
            // Invalid bytes stay 0: each one degrades to a one-byte non-separator
            offset += valid.len() + chunk.invalid().len();
        }

        Self { cuts }
    }

    /// Length of the separator starting at `offset`, or 0.
    pub fn cut_at(&self, offset: usize) -> usize {
        self.cuts.get(offset).map_or(0, |&size| size as usize)
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}
