// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 gh-md Contributors

#![no_main]

use ghmd_core::{find_reference, match_reference, sanitize_path_component, sanitize_title, to_reference, to_url};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    match match_reference(input) {
        Ok(Some(reference)) => {
            for segment in [&reference.owner, &reference.repo] {
                assert!(!segment.is_empty());
                assert!(!segment.contains(['/', '#']));
            }
            // A rendered reference matches back to itself.
            assert_eq!(match_reference(&reference.url()).ok().flatten(), Some(reference.clone()));
        }
        Ok(None) => {
            assert_eq!(to_reference(input), input);
            assert_eq!(to_url(input), input);
        }
        Err(_) => {
            // Overflowing numbers still render.
            assert!(find_reference(input).is_some());
        }
    }

    let once = sanitize_title(input);
    assert_eq!(sanitize_title(&once), once);
    let once = sanitize_path_component(input);
    assert_eq!(sanitize_path_component(&once), once);
});
