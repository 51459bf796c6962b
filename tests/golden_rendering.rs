use std::fs;
use std::path::PathBuf;

use bookicon::render_book;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_digests_match_fixtures() {
    for size in [16u32, 48, 128] {
        let icon = render_book(size).expect("render");
        let digest = icon.digest();

        let expected_path = golden_path(&format!("icon{}.sha256", size));
        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        assert_eq!(digest, exp.trim(), "pixel digest drifted for {}px", size);
    }
}
