//! Cross-line state encoding.
//!
//! The state a line ends in must travel to the next line as a single
//! integer. Internally every scanner models its suspended constructs as a
//! substate enum (no magic-number arithmetic); at the boundary the pair
//! (language index, substate) is packed into a negative `i32`:
//!
//! ```text
//! code = -(language_index * LANG_STRIDE + substate)      substate >= 1
//! ```
//!
//! Non-negative codes mean "default start state". Decoding is defensive:
//! any code that does not name a known substate of the receiving scanner is
//! treated as the default start state, never an error.

/// Stride separating the internal-code namespaces of a composite scanner's
/// sub-languages.
pub const LANG_STRIDE: i32 = 100;

/// Pack a (language index, substate) pair into a boundary code.
///
/// `substate` must be >= 1; substate 0 is reserved so that the default
/// state never collides with `TokenType::Null` (code 0).
#[inline]
pub(crate) fn encode(language_index: u8, substate: u8) -> i32 {
    debug_assert!(substate >= 1, "substate 0 is the default state, not encoded");
    -(i32::from(language_index) * LANG_STRIDE + i32::from(substate))
}

/// Unpack a boundary code into (language index, substate).
///
/// Returns `None` for non-negative codes and for codes whose substate field
/// is 0 — both mean "default start state" to the caller.
#[inline]
pub(crate) fn decode(code: i32) -> Option<(u8, u8)> {
    if code >= 0 {
        return None;
    }
    let v = -code;
    let lang = u8::try_from(v / LANG_STRIDE).ok()?;
    let sub = u8::try_from(v % LANG_STRIDE).ok()?;
    if sub == 0 {
        return None;
    }
    Some((lang, sub))
}
