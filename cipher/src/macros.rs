/// 定义以整数表示的枚举类型, 整数值与底层provider使用的取值一致
macro_rules! impl_cipher_type {
    (
        $(#[$meta: meta])*
        $NAME: ident,
        $REPR: ty,
        $([$(#[$item_meta: meta])* $ITEM: ident $(=$VAL: literal)?]),+
    ) => {
        $(#[$meta])*
        #[repr($REPR)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $NAME {
            $($(#[$item_meta])* $ITEM $(=$VAL)?,)+
        }

        impl $NAME {
            pub const ALL: &'static [$NAME] = &[$(Self::$ITEM),+];
        }

        impl TryFrom<$REPR> for $NAME {
            type Error = $crate::CipherError;

            fn try_from(value: $REPR) -> Result<Self, Self::Error> {
                match value {
                    $(x if x == Self::$ITEM as $REPR => Ok(Self::$ITEM),)+
                    _ => Err($crate::CipherError::Other(format!(
                        "{} is no valid {} value",
                        value,
                        stringify!($NAME)
                    ))),
                }
            }
        }

        impl From<$NAME> for $REPR {
            fn from(value: $NAME) -> Self {
                value as $REPR
            }
        }
    };
}
