use tw_derive::tw_error;

#[tw_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
