use super::Type;

const ALL: [Type; 6] = [
    Type::Integer,
    Type::Real,
    Type::String,
    Type::Boolean,
    Type::List,
    Type::Function,
];

#[test]
fn test_every_type_conforms_to_itself() {
    for ty in ALL {
        assert!(ty.conforms_to(ty), "{ty}");
    }
}

#[test]
fn test_only_integer_widens() {
    assert!(Type::Integer.conforms_to(Type::Real));
    assert!(!Type::Real.conforms_to(Type::Integer));
    for required in ALL {
        for found in ALL {
            if found != required && (found, required) != (Type::Integer, Type::Real) {
                assert!(!found.conforms_to(required), "{found} as {required}");
            }
        }
    }
}
