//! Decorative scene line art.
//!
//! One fixed drawing per [`SceneKind`]. Deterministic on purpose: the
//! original scenes were randomized geometry, but decoration that jitters
//! between frames reads as flicker in a terminal.

use crate::model::SceneKind;

/// The line art for a scene variant.
pub fn scene_art(kind: SceneKind) -> &'static [&'static str] {
    match kind {
        SceneKind::Cad => &[
            r"        ___________        ",
            r"       /  ________ \       ",
            r"      | | ()____() | |     ",
            r"      | |  |    |  | |     ",
            r"      | |__|____|__| |     ",
            r"       \____________/      ",
            r"      [=====||=====]       ",
            r"   ___/     ||     \___    ",
            r"  |________[==]________|   ",
        ],
        SceneKind::Printing => &[
            r"   _______________________ ",
            r"  | []                  [] |",
            r"  |  \       ___          |",
            r"  |   \_____|___|_____    |",
            r"  |         |▒▒▒|         |",
            r"  |        /|▒▒▒|\        |",
            r"  |_______/_|___|_\_______|",
            r"  |_______________________|",
        ],
        SceneKind::Tooling => &[
            r"      .-.     .-.          ",
            r"   .-(   )---(   )-.       ",
            r"  (   )-.   .-(   )        ",
            r"   `-(   )-(   )-'         ",
            r"      `-'   `-'            ",
            r"   ____|_____|____         ",
            r"  |___ press ____|         ",
            r"      |_______|            ",
        ],
        SceneKind::Academy => &[
            r"            __             ",
            r"           /  \            ",
            r"       ___/____\___        ",
            r"      |  _  __  _  |       ",
            r"      | | | || | | |       ",
            r"      | |_| || |_| |       ",
            r"   ___|____________|___    ",
            r"  |____________________|   ",
        ],
        SceneKind::Company => &[
            r"     ____  ____  ____      ",
            r"    | :: || :: || :: |     ",
            r"    | :: || :: || :: |     ",
            r"    | :: || :: || :: |     ",
            r"  __|____||____||____|__   ",
            r" |______________________|  ",
        ],
        SceneKind::Engineering => &[
            r"  . [] .  o  . () .  o  .  ",
            r"  o  . () .  [] .  o  . [] ",
            r"  . () .  o  .  . () .  o  ",
            r"  [] .  o  . () .  [] .  . ",
            r"  .  o  . [] .  o  .  () . ",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_art() {
        for kind in SceneKind::ALL {
            assert!(!scene_art(kind).is_empty());
        }
    }

    #[test]
    fn art_is_stable_between_calls() {
        // Deterministic decoration: two reads yield identical lines.
        assert_eq!(scene_art(SceneKind::Engineering), scene_art(SceneKind::Engineering));
    }
}
