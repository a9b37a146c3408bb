fn main() {
    if let Err(err) = wordcloud_rs::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
