//! `define_record!`: builds a record type from named field descriptors.

/// Declare an immutable record type from a list of field descriptors.
///
/// Each `field: Type = descriptor` binding becomes a `pub field: Option<Type>`
/// on the generated struct, in declaration order. Descriptors must be
/// constant expressions; they are evaluated once at compile time and shared
/// by every parse. The optional `computed` block registers inherent methods
/// (`fn(&Self) -> impl Into<FieldValue>`) for reflective export; they stay
/// ordinary methods on the type.
///
/// ## Example
///
/// ```
/// use carddefs::define_record;
/// use carddefs::fields::{BoolFromTag, FromAttrib, FromTag};
/// use carddefs::schema::Record;
/// use carddefs::xml::Element;
///
/// define_record! {
///     pub struct Minion {
///         id: i64 = FromAttrib::int("ID"),
///         atk: i64 = FromTag::int("ATK"),
///         taunt: bool = BoolFromTag::new("TAUNT"),
///     }
///     computed {
///         is_vanilla => Minion::is_vanilla,
///     }
/// }
///
/// impl Minion {
///     pub fn is_vanilla(&self) -> bool {
///         self.taunt != Some(true)
///     }
/// }
///
/// let entity = Element::parse(r#"<Entity ID="7"><Tag name="ATK" value="2"/></Entity>"#).unwrap();
/// let minion = Minion::from_entity(&entity).unwrap();
///
/// assert_eq!(minion.atk, Some(2));
/// assert!(minion.is_vanilla());
/// assert_eq!(Minion::FIELD_NAMES, &["id", "atk", "taunt"]);
/// ```
#[macro_export]
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $descriptor:expr ),+ $(,)?
        }
        $( computed { $( $computed:ident => $method:path ),* $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, serde::Serialize)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: Option<$ty>, )+
        }

        impl $crate::schema::Record for $name {
            const NAME: &'static str = stringify!($name);
            const FIELD_NAMES: &'static [&'static str] = &[$( stringify!($field) ),+];
            const COMPUTED_NAMES: &'static [&'static str] = &[$($( stringify!($computed) ),*)?];

            fn from_entity(entity: &$crate::xml::Element) -> $crate::Result<Self> {
                Ok(Self {
                    $( $field: {
                        const DESCRIPTOR: &dyn $crate::fields::FieldDescriptor<Output = $ty> = &$descriptor;
                        DESCRIPTOR.extract(entity)?
                    }, )+
                })
            }

            fn descriptors() -> Vec<(&'static str, &'static dyn $crate::fields::ErasedField)> {
                vec![$(
                    (stringify!($field), {
                        const DESCRIPTOR: &dyn $crate::fields::ErasedField = &$descriptor;
                        DESCRIPTOR
                    }),
                )+]
            }

            fn field_value(&self, name: &str) -> Option<$crate::fields::FieldValue> {
                match name {
                    $( stringify!($field) => Some(self.$field.clone().into()), )+
                    _ => None,
                }
            }

            fn computed_value(&self, name: &str) -> Option<$crate::fields::FieldValue> {
                match name {
                    $($( stringify!($computed) => Some($method(self).into()), )*)?
                    _ => None,
                }
            }
        }
    };
}
