//! Opening outbound links in the host browser.

use std::io;

/// Something that can open a URL in a new browsing context.
pub trait Launcher: std::fmt::Debug {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> io::Result<()> {
        // Detached so a slow browser start never stalls the frame loop.
        open::that_detached(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Failing;

    impl Launcher for Failing {
        fn open(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        }
    }

    #[test]
    fn launchers_are_usable_as_trait_objects() {
        let launchers: Vec<Box<dyn Launcher>> = vec![Box::new(SystemLauncher), Box::new(Failing)];
        assert_eq!(launchers.len(), 2);
        let err = launchers[1].open("https://example.com").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
