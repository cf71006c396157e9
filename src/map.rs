/// A rectangular grid addressed by `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<T> {
    number_of_rows: i32,
    number_of_columns: i32,
    row_data: Vec<Vec<T>>,
}

impl<T> Map<T>
where
    T: Clone,
{
    /// Builds a map from ragged rows, padding short rows on the right.
    pub fn from_rows(rows: Vec<Vec<T>>, padding: &T) -> Map<T> {
        let number_of_columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let row_data: Vec<Vec<T>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(number_of_columns, padding.clone());
                row
            })
            .collect();

        Map {
            number_of_rows: row_data.len() as i32,
            number_of_columns: number_of_columns as i32,
            row_data,
        }
    }

    pub fn number_of_rows(&self) -> i32 {
        self.number_of_rows
    }

    pub fn number_of_columns(&self) -> i32 {
        self.number_of_columns
    }

    pub fn at(&self, (col, row): (i32, i32)) -> Option<&T> {
        if !self.in_bounds((col, row)) {
            return None;
        }
        Some(&self.row_data[row as usize][col as usize])
    }

    pub fn at_mut(&mut self, (col, row): (i32, i32)) -> Option<&mut T> {
        if !self.in_bounds((col, row)) {
            return None;
        }
        Some(&mut self.row_data[row as usize][col as usize])
    }

    pub fn in_bounds(&self, (col, row): (i32, i32)) -> bool {
        !(row < 0 || row >= self.number_of_rows || col < 0 || col >= self.number_of_columns)
    }

    pub fn indexed_for_each<F>(&self, mut f: F)
    where
        F: FnMut((i32, i32), &T),
    {
        for (y, row) in self.row_data.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                f((x as i32, y as i32), value);
            }
        }
    }

    /// All positions holding `needle`, in row-major order.
    pub fn find(&self, needle: &T) -> Vec<(i32, i32)>
    where
        T: PartialEq,
    {
        let mut rv: Vec<(i32, i32)> = Vec::new();

        self.indexed_for_each(|p, value| {
            if value == needle {
                rv.push(p);
            }
        });

        rv
    }

    pub fn show<F>(&self, format_cell: F) -> Vec<String>
    where
        F: Fn(&T) -> char,
    {
        self.row_data
            .iter()
            .map(|row| row.iter().map(&format_cell).collect())
            .collect()
    }
}
