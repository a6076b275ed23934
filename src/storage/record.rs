use super::error::{Result, StoreError};

/// A single student's details and academic data. The grade is derived from
/// the score and recomputed on every update, so the two never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    id: u32,
    name: String,
    email: String,
    course: String,
    score: f64,
    grade: char,
}

impl StudentRecord {
    pub fn new(id: u32, name: String, email: String, course: String, score: f64) -> Self {
        Self {
            id,
            name,
            email,
            course,
            score,
            grade: grade_for(score),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn grade(&self) -> char {
        self.grade
    }

    /// Replaces all mutable fields at once and recomputes the grade.
    /// Partial updates are not supported; the roll number never changes.
    pub fn update_details(&mut self, name: String, email: String, course: String, score: f64) {
        self.name = name;
        self.email = email;
        self.course = course;
        self.score = score;
        self.grade = grade_for(score);
    }

    /// Parses one data-file line: `id|name|email|course|score`.
    /// Exactly five fields are required and id/score must be numeric.
    pub fn from_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() != 5 {
            return Err(StoreError::MalformedRecord(format!(
                "expected 5 fields, got {}: {:?}",
                fields.len(),
                line
            )));
        }

        let id = fields[0]
            .parse::<u32>()
            .map_err(|_| StoreError::MalformedRecord(format!("bad roll number: {:?}", fields[0])))?;
        let score = fields[4]
            .parse::<f64>()
            .map_err(|_| StoreError::MalformedRecord(format!("bad score: {:?}", fields[4])))?;

        Ok(Self::new(
            id,
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            score,
        ))
    }

    /// Serializes to the data-file line format. A `|` inside a field is not
    /// escaped and will corrupt parsing on reload; known format limitation.
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.id, self.name, self.email, self.course, self.score
        )
    }
}

/// Grading thresholds. Out-of-range scores still grade through the same
/// table: anything >= 90 is an A, anything below 60 is a D.
fn grade_for(score: f64) -> char {
    if score >= 90.0 {
        'A'
    } else if score >= 75.0 {
        'B'
    } else if score >= 60.0 {
        'C'
    } else {
        'D'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: f64) -> StudentRecord {
        StudentRecord::new(
            1,
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "CS101".to_string(),
            score,
        )
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(record(90.0).grade(), 'A');
        assert_eq!(record(89.99).grade(), 'B');
        assert_eq!(record(75.0).grade(), 'B');
        assert_eq!(record(74.99).grade(), 'C');
        assert_eq!(record(60.0).grade(), 'C');
        assert_eq!(record(59.99).grade(), 'D');
    }

    #[test]
    fn test_out_of_range_scores_still_grade() {
        assert_eq!(record(150.0).grade(), 'A');
        assert_eq!(record(-10.0).grade(), 'D');
    }

    #[test]
    fn test_update_recomputes_grade() {
        let mut r = record(95.0);
        assert_eq!(r.grade(), 'A');

        r.update_details(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "CS102".to_string(),
            58.0,
        );
        assert_eq!(r.grade(), 'D');
        assert_eq!(r.course(), "CS102");
        assert_eq!(r.id(), 1);
    }

    #[test]
    fn test_line_round_trip() {
        let r = record(87.5);
        let parsed = StudentRecord::from_line(&r.to_line()).unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn test_from_line_rejects_wrong_field_count() {
        assert!(StudentRecord::from_line("1|Alice|alice@example.com").is_err());
        assert!(StudentRecord::from_line("1|a|b|c|d|e|99").is_err());
    }

    #[test]
    fn test_from_line_rejects_bad_numbers() {
        assert!(StudentRecord::from_line("x|Alice|a@b.com|CS101|90").is_err());
        assert!(StudentRecord::from_line("1|Alice|a@b.com|CS101|ninety").is_err());
    }
}
