use bitflags::bitflags;

bitflags! {
    /// Auxiliary outputs the engine computes for a response.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AuxOutputs: u32 {
        const QUALITY_SCORES = 1 << 0;
        const ALIGNMENT = 1 << 1;
        const SENTENCE_MAPPINGS = 1 << 2;
        const HTML = 1 << 3;
    }
}

impl AuxOutputs {
    /// Alignments are only meaningful next to sentence mappings.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.contains(Self::ALIGNMENT) { self | Self::SENTENCE_MAPPINGS } else { self }
    }
}
