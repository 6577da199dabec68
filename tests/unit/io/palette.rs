//! Tests for thread-to-colour palettes and their registry

#[cfg(test)]
mod tests {
    use loomtile::io::palette::{PALETTE_NAMES, PLEASANT, PRIMARY, palette_by_name};
    use loomtile::weave::thread::Thread;

    // Tests the primary palette maps threads to saturated channels
    // Verified by permuting the colour order
    #[test]
    fn test_primary_palette_maps_threads_to_channels() {
        assert_eq!(PRIMARY.colour(Thread::Red), [255, 0, 0]);
        assert_eq!(PRIMARY.colour(Thread::Green), [0, 255, 0]);
        assert_eq!(PRIMARY.colour(Thread::Blue), [0, 0, 255]);
        assert_eq!(PRIMARY.colour(Thread::Yellow), [255, 255, 0]);
    }

    // Tests the default palette keeps the original softer colours
    // Verified by substituting the primary values
    #[test]
    fn test_pleasant_palette_values() {
        assert_eq!(PLEASANT.colour(Thread::Red), [214, 126, 195]);
        assert_eq!(PLEASANT.colour(Thread::Green), [24, 185, 196]);
        assert_eq!(PLEASANT.colour(Thread::Blue), [128, 65, 196]);
        assert_eq!(PLEASANT.colour(Thread::Yellow), [128, 196, 65]);
    }

    // Tests each registry name resolves to a distinct palette
    // Verified by aliasing both names to one palette
    #[test]
    fn test_registry_resolves_named_palettes() {
        for name in PALETTE_NAMES {
            assert!(palette_by_name(name).is_ok(), "'{name}' should resolve");
        }
        assert_ne!(palette_by_name("primary").ok(), palette_by_name("pleasant").ok());
        assert!(palette_by_name("garish").is_err());
    }
}
