/// Static image resource, resolved by the host's asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSource {
    pub asset: &'static str,
}

impl ImageSource {
    pub const fn asset(asset: &'static str) -> Self {
        Self { asset }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Image(ImageSource),
    Children(Vec<super::Element>),
}
