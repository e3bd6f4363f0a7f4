/// Page window over an ordered result set, pages start from 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Number of pages needed to list `total_docs`, zero when there is nothing to list
    pub fn total_pages(&self, total_docs: i64) -> i64 {
        if self.limit <= 0 || total_docs <= 0 {
            return 0;
        }
        (total_docs + self.limit - 1) / self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(1, 30).offset(), 0);
        assert_eq!(Pagination::new(3, 30).offset(), 60);
    }

    #[test]
    fn test_total_pages() {
        let pagination = Pagination::new(1, 30);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(30), 1);
        assert_eq!(pagination.total_pages(31), 2);
        assert_eq!(pagination.total_pages(100), 4);
    }
}
