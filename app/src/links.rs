//! Opening a navigation entry in a new browsing context.

use leptos::prelude::{provide_context, use_context};
use std::sync::Arc;

use crate::catalog::NavigationEntry;

/// Target asking for a new top-level browsing context.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// The new context gets neither a `window.opener` handle nor a `Referer`.
pub const ISOLATION_FEATURES: &str = "noopener,noreferrer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenRequest<'a> {
    pub url: &'a str,
    pub target: &'static str,
    pub features: &'static str,
}

impl<'a> OpenRequest<'a> {
    pub fn new_context(url: &'a str) -> Self {
        Self {
            url,
            target: NEW_CONTEXT_TARGET,
            features: ISOLATION_FEATURES,
        }
    }
}

/// Whatever can open a url: the browser window in production.
pub trait Opener {
    fn open(&self, request: &OpenRequest<'_>);
}

pub struct BrowserWindow;

impl Opener for BrowserWindow {
    fn open(&self, request: &OpenRequest<'_>) {
        use leptos::prelude::window;

        // With `noopener` the browser hands back null even when the tab did
        // open, a popup blocker can't be told apart, so there's nothing to report.
        if let Err(error) = window().open_with_url_and_target_and_features(
            request.url,
            request.target,
            request.features,
        ) {
            log::debug!("window.open threw for `{}': {:?}", request.url, error);
        }
    }
}

pub type SharedOpener = Arc<dyn Opener + Send + Sync>;

#[derive(Clone)]
struct OpenerContext(SharedOpener);

/// Replace the browser window as the opener for everything rendered under
/// the current owner.
pub fn provide_opener<O: Opener + Send + Sync + 'static>(opener: O) {
    provide_context(OpenerContext(Arc::new(opener)));
}

/// The opener provided by [`provide_opener`], or [`BrowserWindow`].
pub fn use_opener() -> SharedOpener {
    use_context::<OpenerContext>()
        .map(|OpenerContext(opener)| opener)
        .unwrap_or_else(|| Arc::new(BrowserWindow))
}

pub fn activate_with<O: Opener + ?Sized>(entry: &NavigationEntry, opener: &O) {
    log::debug!("opening \"{}\" at {}", entry.title, entry.url);
    opener.open(&OpenRequest::new_context(entry.url));
}

pub fn activate(entry: &NavigationEntry) {
    activate_with(entry, &*use_opener())
}

/// What a card does when it's clicked or a key is pressed while it has focus.
///
/// The opener is resolved when the card renders: event handlers run outside
/// of the reactive owner and can't see its context.
#[derive(Clone)]
pub struct Activation {
    entry: &'static NavigationEntry,
    opener: SharedOpener,
}

impl Activation {
    pub fn new(entry: &'static NavigationEntry) -> Self {
        Self {
            entry,
            opener: use_opener(),
        }
    }

    pub fn click(&self) {
        activate_with(self.entry, &*self.opener)
    }

    /// Enter and Space activate, like on a native link or button. Returns
    /// whether the key was used, so the caller can prevent its default action.
    pub fn key(&self, key: &str) -> bool {
        if matches!(key, "Enter" | " ") {
            self.click();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Accent, Icon, CATALOG};
    use leptos::prelude::Owner;
    use std::sync::Mutex;

    type Requests = Vec<(String, &'static str, &'static str)>;

    #[derive(Clone, Default)]
    struct Recorder {
        requests: Arc<Mutex<Requests>>,
    }

    impl Recorder {
        fn requests(&self) -> Requests {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Opener for Recorder {
        fn open(&self, request: &OpenRequest<'_>) {
            self.requests.lock().unwrap().push((
                String::from(request.url),
                request.target,
                request.features,
            ));
        }
    }

    static CONTACT: NavigationEntry = NavigationEntry {
        title: "Contact",
        description: "Say hello",
        url: "mailto:test@example.com",
        icon: Icon::Mail,
        accent: Accent { start: "from-orange-500", end: "to-red-500" },
    };

    #[test]
    fn mailto_is_opened_like_any_url() {
        let recorder = Recorder::default();
        activate_with(&CONTACT, &recorder);
        assert_eq!(
            vec![(
                String::from("mailto:test@example.com"),
                "_blank",
                "noopener,noreferrer"
            )],
            recorder.requests()
        );
    }

    #[test]
    fn each_activation_opens_its_own_url() {
        let recorder = Recorder::default();
        for entry in CATALOG.entries() {
            activate_with(entry, &recorder);
        }
        let requests = recorder.requests();
        assert_eq!(CATALOG.len(), requests.len());
        for (entry, (url, target, features)) in CATALOG.entries().iter().zip(requests.iter()) {
            assert_eq!(entry.url, url.as_str());
            assert_eq!(NEW_CONTEXT_TARGET, *target);
            assert_eq!(ISOLATION_FEATURES, *features);
        }
    }

    #[test]
    fn card_activation_reaches_the_provided_opener() {
        let recorder = Recorder::default();
        Owner::new().with(|| {
            provide_opener(recorder.clone());
            let activation = Activation::new(&CONTACT);
            activation.click();
            assert!(activation.key("Enter"));
            assert!(activation.key(" "));
        });
        let expected = (String::from(CONTACT.url), "_blank", "noopener,noreferrer");
        assert_eq!(vec![expected.clone(), expected.clone(), expected], recorder.requests());
    }

    #[test]
    fn other_keys_are_ignored() {
        let recorder = Recorder::default();
        Owner::new().with(|| {
            provide_opener(recorder.clone());
            let activation = Activation::new(&CONTACT);
            assert!(!activation.key("Tab"));
            assert!(!activation.key("a"));
        });
        assert!(recorder.requests().is_empty());
    }

    #[test]
    fn activate_uses_the_provided_opener() {
        let recorder = Recorder::default();
        Owner::new().with(|| {
            provide_opener(recorder.clone());
            activate(&CONTACT);
        });
        assert_eq!(1, recorder.requests().len());
    }
}
