//! Static chord preset tables for the pedal's chord engine.
//!
//! Pure data: each preset is a labelled sequence of fixed-size chords, with
//! notes given as MIDI numbers and [`NO_NOTE`] padding chords shorter than
//! [`NOTES_PER_CHORD`]. The gesture layer never reads these; the
//! application's gesture sink steps through them on hold taps.

/// Fixed width of a chord row.
pub const NOTES_PER_CHORD: usize = 4;

/// Sentinel for an unused slot in a chord row.
pub const NO_NOTE: i8 = -1;

/// A named chord progression.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordPreset {
    /// Display label, e.g. `"IM7 > IVM7"`.
    pub name: &'static str,
    /// Chord rows in progression order; slots past the chord's size hold
    /// [`NO_NOTE`].
    pub chords: &'static [[i8; NOTES_PER_CHORD]],
}

impl ChordPreset {
    /// Number of chords in the progression.
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// The playable notes of one chord, with [`NO_NOTE`] padding skipped.
    pub fn notes(&self, chord: usize) -> impl Iterator<Item = i8> + '_ {
        self.chords[chord].iter().copied().filter(|&n| n != NO_NOTE)
    }
}

/// Factory presets.
pub const PRESETS: [ChordPreset; 3] = [
    ChordPreset {
        name: "IM7 > IVM7",
        chords: &[
            [60, 64, 67, 71], // CM7
            [53, 57, 60, 64], // FM7
        ],
    },
    ChordPreset {
        name: "IIm7 > V7 > IM7",
        chords: &[
            [62, 64, 69, NO_NOTE],
            [55, 62, 69, NO_NOTE],
            [60, 67, 71, NO_NOTE],
        ],
    },
    ChordPreset {
        name: "Isus2 > bVIIsus2",
        chords: &[
            [60, 67, 74, NO_NOTE],
            [58, 65, 72, NO_NOTE],
        ],
    },
];
