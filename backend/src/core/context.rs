use crate::catalog;
use crate::cfg;
use crate::tester;

pub type ArcContext = std::sync::Arc<Context>;

#[derive(Clone)]
pub struct Context {
    pub catalog: catalog::Catalog,
    pub tester: tester::Tester,
    pub settings: cfg::AppSettings,
}

impl Context {
    #[must_use]
    pub fn new(catalog: catalog::Catalog, tester: tester::Tester, settings: cfg::AppSettings) -> ArcContext {
        Self {
            catalog,
            tester,
            settings,
        }
        .into()
    }
}
