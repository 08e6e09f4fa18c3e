// Declarative generators for the model catalog.
//
// `ocm_type!` expands a field list into the value type, its builder, the
// `Buildable` glue and a JSON codec where only present attributes are written.
// Objects additionally carry `kind`, `id`, `href` and the link flag.

macro_rules! ocm_type {
    (
        $(#[$meta:meta])*
        object $name:ident($kind:literal) / $builder:ident {
            $( $(#[$fmeta:meta])* $field:ident: $ty:ty => $json:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            link: bool,
            id: Option<String>,
            href: Option<String>,
            $( $field: Option<$ty>, )*
        }

        impl $name {
            #[doc = concat!("An empty [`", stringify!($builder), "`].")]
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Whether this value is only a reference to the object.
            pub fn link(&self) -> bool {
                self.link
            }

            /// Identifier of the object.
            pub fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            /// Self link of the object.
            pub fn href(&self) -> Option<&str> {
                self.href.as_deref()
            }

            /// Serialized kind, which depends on the link flag.
            pub fn kind(&self) -> &'static str {
                if self.link {
                    concat!($kind, "Link")
                } else {
                    $kind
                }
            }

            /// True when no attribute is present. The link flag is not an attribute.
            pub fn is_empty(&self) -> bool {
                self.id.is_none() && self.href.is_none() $( && self.$field.is_none() )*
            }

            $(
                #[doc = concat!("The `", $json, "` attribute, if present.")]
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            link: bool,
            id: Option<String>,
            href: Option<String>,
            $( $field: Option<<$ty as $crate::Buildable>::Builder>, )*
        }

        impl $builder {
            /// Mark the value as a reference to the object rather than the object itself.
            pub fn link(mut self, value: bool) -> Self {
                self.link = value;
                self
            }

            /// Set the identifier.
            pub fn id(mut self, value: impl Into<String>) -> Self {
                self.id = Some(value.into());
                self
            }

            /// Set the self link.
            pub fn href(mut self, value: impl Into<String>) -> Self {
                self.href = Some(value.into());
                self
            }

            $(
                #[doc = concat!("Set the `", $json, "` attribute.")]
                $(#[$fmeta])*
                pub fn $field(mut self, value: impl Into<<$ty as $crate::Buildable>::Builder>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Replace the state of this builder with that of an existing value.
            pub fn copy(self, object: &$name) -> Self {
                object.into()
            }

            #[doc = concat!("Build a [`", stringify!($name), "`], building nested values first.")]
            pub fn build(&self) -> Result<$name, $crate::BuildError> {
                if self.link && self.id.is_none() && self.href.is_none() {
                    return Err($crate::BuildError::UnresolvableLink { kind: $kind });
                }
                Ok($name {
                    link: self.link,
                    id: self.id.clone(),
                    href: self.href.clone(),
                    $(
                        $field: self
                            .$field
                            .as_ref()
                            .map(<$ty as $crate::Buildable>::build_from)
                            .transpose()?,
                    )*
                })
            }
        }

        impl From<&$name> for $builder {
            fn from(object: &$name) -> Self {
                Self {
                    link: object.link,
                    id: object.id.clone(),
                    href: object.href.clone(),
                    $( $field: object.$field.as_ref().map(<$ty as $crate::Buildable>::to_builder), )*
                }
            }
        }

        impl From<$name> for $builder {
            fn from(object: $name) -> Self {
                Self::from(&object)
            }
        }

        impl $crate::Buildable for $name {
            type Builder = $builder;

            fn build_from(builder: &$builder) -> Result<Self, $crate::BuildError> {
                builder.build()
            }

            fn to_builder(&self) -> $builder {
                self.into()
            }
        }

        impl $crate::Object for $name {
            const KIND: &'static str = $kind;

            fn link(&self) -> bool {
                self.link
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn href(&self) -> Option<&str> {
                self.href.as_deref()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("kind", self.kind())?;
                if let Some(id) = &self.id {
                    map.serialize_entry("id", id)?;
                }
                if let Some(href) = &self.href {
                    map.serialize_entry("href", href)?;
                }
                $(
                    if let Some(value) = &self.$field {
                        map.serialize_entry($json, value)?;
                    }
                )*
                map.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct Visitor;

                impl<'de> ::serde::de::Visitor<'de> for Visitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("a ", $kind, " object"))
                    }

                    fn visit_map<A>(self, mut map: A) -> Result<$name, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        let mut object = $name::default();
                        while let Some(key) = map.next_key::<String>()? {
                            match key.as_str() {
                                "kind" => {
                                    let kind: String = map.next_value()?;
                                    object.link = kind == concat!($kind, "Link");
                                }
                                "id" => object.id = map.next_value()?,
                                "href" => object.href = map.next_value()?,
                                $( $json => object.$field = map.next_value()?, )*
                                _ => {
                                    map.next_value::<::serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        Ok(object)
                    }
                }

                deserializer.deserialize_map(Visitor)
            }
        }
    };

    (
        $(#[$meta:meta])*
        struct $name:ident / $builder:ident {
            $( $(#[$fmeta:meta])* $field:ident: $ty:ty => $json:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $( $field: Option<$ty>, )*
        }

        impl $name {
            #[doc = concat!("An empty [`", stringify!($builder), "`].")]
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// True when no attribute is present.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            $(
                #[doc = concat!("The `", $json, "` attribute, if present.")]
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            $( $field: Option<<$ty as $crate::Buildable>::Builder>, )*
        }

        impl $builder {
            $(
                #[doc = concat!("Set the `", $json, "` attribute.")]
                $(#[$fmeta])*
                pub fn $field(mut self, value: impl Into<<$ty as $crate::Buildable>::Builder>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Replace the state of this builder with that of an existing value.
            pub fn copy(self, value: &$name) -> Self {
                value.into()
            }

            #[doc = concat!("Build a [`", stringify!($name), "`], building nested values first.")]
            pub fn build(&self) -> Result<$name, $crate::BuildError> {
                Ok($name {
                    $(
                        $field: self
                            .$field
                            .as_ref()
                            .map(<$ty as $crate::Buildable>::build_from)
                            .transpose()?,
                    )*
                })
            }
        }

        impl From<&$name> for $builder {
            fn from(value: &$name) -> Self {
                Self {
                    $( $field: value.$field.as_ref().map(<$ty as $crate::Buildable>::to_builder), )*
                }
            }
        }

        impl From<$name> for $builder {
            fn from(value: $name) -> Self {
                Self::from(&value)
            }
        }

        impl $crate::Buildable for $name {
            type Builder = $builder;

            fn build_from(builder: &$builder) -> Result<Self, $crate::BuildError> {
                builder.build()
            }

            fn to_builder(&self) -> $builder {
                self.into()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(None)?;
                $(
                    if let Some(value) = &self.$field {
                        map.serialize_entry($json, value)?;
                    }
                )*
                map.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct Visitor;

                impl<'de> ::serde::de::Visitor<'de> for Visitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("a ", stringify!($name), " value"))
                    }

                    fn visit_map<A>(self, mut map: A) -> Result<$name, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        #[allow(unused_mut)]
                        let mut value = $name::default();
                        while let Some(key) = map.next_key::<String>()? {
                            match key.as_str() {
                                $( $json => value.$field = map.next_value()?, )*
                                _ => {
                                    map.next_value::<::serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        Ok(value)
                    }
                }

                deserializer.deserialize_map(Visitor)
            }
        }
    };
}

macro_rules! ocm_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )*
        }
    ) => {
        $(#[$meta])*
        ///
        /// Values compare by their wire representation, so an `Other` holding a
        /// known value equals the named variant it decodes to.
        #[derive(Clone, Debug)]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $(#[$vmeta])*
                $variant,
            )*
            /// A value this client does not know about, kept verbatim.
            Other(String),
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl $name {
            /// The wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Other(value) => value,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )*
                    other => Self::Other(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $value => Self::$variant, )*
                    _ => Self::Other(value),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as ::serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl $crate::Buildable for $name {
            type Builder = $name;

            fn build_from(builder: &$name) -> Result<Self, $crate::BuildError> {
                Ok(builder.clone())
            }

            fn to_builder(&self) -> $name {
                self.clone()
            }
        }
    };
}
