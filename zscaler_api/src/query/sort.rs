use std::str::FromStr;

/// Field the server sorts list results by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    CreationTime,
    ModifiedTime,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortField::Id => "id",
                SortField::Name => "name",
                SortField::CreationTime => "creationTime",
                SortField::ModifiedTime => "modifiedTime",
            }
        )?;
        Ok(())
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "creationTime" => Ok(SortField::CreationTime),
            "modifiedTime" => Ok(SortField::ModifiedTime),
            _ => Err(()),
        }
    }
}

/// Sort order for list results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::Asc => "ASC",
                SortOrder::Desc => "DESC",
            }
        )?;
        Ok(())
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_wire_names() {
        assert_eq!(SortField::CreationTime.to_string(), "creationTime");
        assert_eq!("modifiedTime".parse(), Ok(SortField::ModifiedTime));
        assert_eq!("Name".parse::<SortField>(), Err(()));
    }

    #[test]
    fn sort_order_is_upper_case() {
        assert_eq!(SortOrder::Desc.to_string(), "DESC");
        assert_eq!("ASC".parse(), Ok(SortOrder::Asc));
        assert_eq!("asc".parse::<SortOrder>(), Err(()));
    }
}
