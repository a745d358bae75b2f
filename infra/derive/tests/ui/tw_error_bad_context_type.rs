use tw_derive::tw_error;

#[tw_error]
pub enum DemoError {
    Io { source: std::io::Error, context: Option<String> },
}

fn main() {}
