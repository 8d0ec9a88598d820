/// The derived parts of a split URL.
///
/// Every field is a pure function of the input and of the fields listed in
/// [`Field::dependencies`]. The graph is acyclic and [`Field::ALL`] is one of
/// its topological orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Protocol,
    Authorization,
    Username,
    Password,
    Domain,
    DomainList,
    DomainLevels,
    Port,
    Request,
    Path,
    PathList,
    File,
    FileName,
    FileExtension,
    DirectoryList,
    Directory,
    Query,
    QueryList,
    QueryObject,
    Fragment,
}

impl Field {
    /// Number of fields
    pub const COUNT: usize = 20;

    /// All fields in dependency order: every field comes after the fields it reads.
    pub const ALL: [Field; Self::COUNT] = [
        Self::Protocol,
        Self::Authorization,
        Self::Username,
        Self::Password,
        Self::Domain,
        Self::DomainList,
        Self::DomainLevels,
        Self::Port,
        Self::Request,
        Self::Path,
        Self::PathList,
        Self::File,
        Self::FileName,
        Self::FileExtension,
        Self::DirectoryList,
        Self::Directory,
        Self::Query,
        Self::QueryList,
        Self::QueryObject,
        Self::Fragment,
    ];

    /// Position in [`Field::ALL`], used as the cache slot
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Public name of the field (e.g. `"domainList"`)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Authorization => "authorization",
            Self::Username => "username",
            Self::Password => "password",
            Self::Domain => "domain",
            Self::DomainList => "domainList",
            Self::DomainLevels => "domainLevels",
            Self::Port => "port",
            Self::Request => "request",
            Self::Path => "path",
            Self::PathList => "pathList",
            Self::File => "file",
            Self::FileName => "fileName",
            Self::FileExtension => "fileExtension",
            Self::DirectoryList => "directoryList",
            Self::Directory => "directory",
            Self::Query => "query",
            Self::QueryList => "queryList",
            Self::QueryObject => "queryObject",
            Self::Fragment => "fragment",
        }
    }

    /// Fields whose values this field's rule reads directly
    pub const fn dependencies(self) -> &'static [Field] {
        match self {
            Self::Protocol => &[],
            Self::Authorization | Self::Request => &[Self::Protocol],
            Self::Username | Self::Password => &[Self::Authorization],
            Self::Domain | Self::Port => &[Self::Protocol, Self::Authorization],
            Self::DomainList => &[Self::Domain],
            Self::DomainLevels => &[Self::DomainList],
            Self::Path | Self::Query | Self::Fragment => &[Self::Request],
            Self::PathList => &[Self::Path],
            Self::File => &[Self::PathList],
            Self::FileName => &[Self::File],
            Self::FileExtension => &[Self::File, Self::FileName],
            Self::DirectoryList => &[Self::PathList, Self::File],
            Self::Directory => &[Self::DirectoryList],
            Self::QueryList => &[Self::Query],
            Self::QueryObject => &[Self::QueryList],
        }
    }

    /// Whether the field holds a list of strings
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::DomainList
                | Self::DomainLevels
                | Self::PathList
                | Self::DirectoryList
                | Self::QueryList
        )
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownField;

impl core::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Unknown URL field name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownField {}

impl core::str::FromStr for Field {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or(UnknownField)
    }
}
