pub fn git_describe() -> &'static str {
    env!("GIT_DESCRIBE")
}

pub fn git_hash() -> &'static str {
    env!("GIT_HASH")
}

pub fn report(name: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let describe = git_describe();
    let hash = git_hash();
    format!(
        "{{\n  \"name\": \"{name}\",\n  \"version\": \"{version}\",\n  \
         \"git_describe\": \"{describe}\",\n  \"git_hash\": \"{hash}\"\n}}"
    )
}

pub fn print_report(name: &str) {
    println!("{}", report(name));
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn report_names_binary() {
        let r = report("fdm1d");
        assert!(r.starts_with('{'));
        assert!(r.contains("\"name\": \"fdm1d\""));
        assert!(r.contains(env!("CARGO_PKG_VERSION")));
    }
}
