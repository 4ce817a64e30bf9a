/// use to define some keyword set
///
/// gives the enum, its display and deref to the literal, an `ALL` list
/// for building rules, and a conflict checked lookup
#[macro_export]
macro_rules! keywords {
    ($(
        $(#[$metas:meta])*
        keywords $enum_name:ident
        { $(
            $string:literal -> $var:ident,
        )*}
    )*) => {
        $(
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $(#[$metas])*
        pub enum $enum_name {
            $(
                $var,
            )*
        }

        impl $enum_name {
            /// every keyword literal, in declaration order
            pub const ALL: &'static [&'static str] = &[$($string,)*];

            /// which keyword a piece of text is, if any
            pub fn matched(text: &str) -> Option<Self> {
                use std::collections::HashMap;

                $crate::lazy_static::lazy_static! {
                    static ref MAP: HashMap<&'static str, $enum_name> = {
                        let mut map = HashMap::new();
                        $(
                            if let Some(previous) = map.insert($string, $enum_name::$var) {
                                panic!("conflicting: both `{}` and `{}` are `{}`",
                                    $enum_name::$var, previous, $string
                                );
                            }
                        )*
                        map
                    };
                }

                MAP.get(text).copied()
            }
        }

        impl std::ops::Deref for $enum_name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                match self {
                    $(Self::$var => $string,)*
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
                f.write_str(self)
            }
        }

        )*
    };
}

#[cfg(test)]
mod tests {
    crate::keywords! {
        keywords Greeting {
            "hello" -> Hello,
            "hi" -> Hi,
        }
    }

    crate::keywords! {
        keywords Conflicting {
            "same" -> First,
            "same" -> Second,
        }
    }

    #[test]
    fn display_and_deref() {
        assert_eq!(Greeting::Hello.to_string(), "hello");
        assert_eq!(&*Greeting::Hi, "hi");
    }

    #[test]
    fn all_in_order() {
        assert_eq!(Greeting::ALL, &["hello", "hi"]);
    }

    #[test]
    fn lookup() {
        assert_eq!(Greeting::matched("hello"), Some(Greeting::Hello));
        assert_eq!(Greeting::matched("hullo"), None);
    }

    #[test]
    #[should_panic]
    fn conflicting_keywords() {
        Conflicting::matched("same");
    }
}
